use log::trace;

/// Sequências que sabem produzir uma cópia de si mesmas em ordem inversa.
///
/// O valor original é apenas emprestado (`&self`), nunca modificado: o
/// resultado é sempre um valor novo, com o mesmo tamanho e os mesmos
/// elementos, tal que `saida[i] == entrada[n - 1 - i]`.
pub trait Backwards
{
    type Output;

    fn backwards(&self) -> Self::Output;
}

impl Backwards for str
{
    type Output = String;

    // Inverte por `char` (valor escalar Unicode)
    fn backwards(&self) -> String
    {
        self.chars().rev().collect()
    }
}

impl Backwards for String
{
    type Output = String;

    fn backwards(&self) -> String
    {
        self.as_str().backwards()
    }
}

impl<T: Clone> Backwards for [T]
{
    type Output = Vec<T>;

    fn backwards(&self) -> Vec<T>
    {
        self.iter().rev().cloned().collect()
    }
}

impl<T: Clone> Backwards for Vec<T>
{
    type Output = Vec<T>;

    fn backwards(&self) -> Vec<T>
    {
        self.as_slice().backwards()
    }
}

impl<T: Clone, const N: usize> Backwards for [T; N]
{
    type Output = [T; N];

    fn backwards(&self) -> [T; N]
    {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }
}

/// Retorna `sequence` com a ordem dos elementos invertida.
///
/// ```
/// use backwards::backwards;
///
/// assert_eq!(backwards("hello"), "olleh");
/// assert_eq!(backwards(&vec![1, 2, 3]), vec![3, 2, 1]);
/// ```
pub fn backwards<S: Backwards + ?Sized>(sequence: &S) -> S::Output
{
    trace!("invertendo sequência de {}", std::any::type_name::<S>());
    sequence.backwards()
}
