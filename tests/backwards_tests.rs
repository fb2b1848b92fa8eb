//! Propriedades da inversão de sequências

use backwards::backwards;
use backwards::backwards_by;
use backwards::Unit;
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

#[test]
fn test_documented_examples()
{
    assert_eq!(backwards(""), "");
    assert_eq!(backwards("a"), "a");
    assert_eq!(backwards("hello"), "olleh");
    assert_eq!(backwards("ab cd"), "dc ba");
}

#[test]
fn test_punctuation_is_an_ordinary_element()
{
    assert_eq!(backwards("Olá, mundo!"), "!odnum ,álO");
}

// Grafemas que começam por um caractere base: a concatenação em qualquer ordem
// preserva as fronteiras entre eles.
const CLUSTERS: &[&str] = &["a", "Z", " ", "!", "ç", "e\u{308}", "日", "\u{1F44D}\u{1F3FD}", "\u{1F468}\u{200D}\u{1F469}"];

proptest! {
    #[test]
    fn test_char_reversal_is_an_involution(s in any::<String>())
    {
        prop_assert_eq!(backwards(&backwards(&s)), s);
    }

    #[test]
    fn test_char_reversal_mirrors_indices(s in any::<String>())
    {
        let input: Vec<char> = s.chars().collect();
        let output: Vec<char> = backwards(&s).chars().collect();
        let n = input.len();

        prop_assert_eq!(output.len(), n);
        for i in 0..n
        {
            prop_assert_eq!(output[i], input[n - 1 - i]);
        }
    }

    #[test]
    fn test_vec_reversal_keeps_input(v in prop::collection::vec(any::<i64>(), 0..64))
    {
        let before = v.clone();
        let output = backwards(&v);

        prop_assert_eq!(&v, &before);
        prop_assert_eq!(output.len(), v.len());
        prop_assert_eq!(backwards(&output), v);
    }

    #[test]
    fn test_grapheme_reversal_is_an_involution(clusters in prop::collection::vec(prop::sample::select(CLUSTERS), 0..16))
    {
        let s = clusters.concat();
        let once = backwards_by(&s, Unit::Grapheme);

        prop_assert_eq!(once.graphemes(true).count(), s.graphemes(true).count());
        prop_assert_eq!(backwards_by(&once, Unit::Grapheme), s);
    }
}
