//! Inversão de sequências: textos (por `char` ou por grafema) e qualquer
//! coleção ordenada de elementos clonáveis.

pub mod config;
pub mod errors;
pub mod input;
pub mod output;
pub mod sequence;

pub use config::Config;
pub use errors::BackwardsError;
pub use output::Reversal;
pub use sequence::backwards::backwards;
pub use sequence::backwards::Backwards;
pub use sequence::unit::backwards_by;
pub use sequence::unit::backwards_graphemes;
pub use sequence::unit::Unit;
