use serde::Serialize;

use crate::errors::BackwardsError;
use crate::sequence::unit::backwards_by;
use crate::sequence::unit::Unit;

/// Resultado de uma inversão, do jeito que a linha de comando o imprime.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct Reversal
{
    pub input: String,
    pub output: String,
    pub unit: Unit,
}

impl Reversal
{
    pub fn new(input: String, unit: Unit) -> Self
    {
        let output = backwards_by(&input, unit);
        Self { input, output, unit }
    }

    pub fn render(&self, json: bool) -> Result<String, BackwardsError>
    {
        if json
        {
            Ok(serde_json::to_string(self)?)
        }
        else
        {
            Ok(self.output.clone())
        }
    }
}

#[cfg(test)]
mod tests
{
    use serde_json::json;
    use serde_json::Value;

    use super::*;

    #[test]
    fn test_plain_render()
    {
        let reversal = Reversal::new("hello".to_string(), Unit::Char);
        assert_eq!(reversal.render(false).unwrap(), "olleh");
    }

    #[test]
    fn test_json_render()
    {
        let reversal = Reversal::new("ab cd".to_string(), Unit::Grapheme);
        let value: Value = serde_json::from_str(&reversal.render(true).unwrap()).unwrap();

        assert_eq!(value, json!({ "input": "ab cd", "output": "dc ba", "unit": "grapheme" }));
    }
}
