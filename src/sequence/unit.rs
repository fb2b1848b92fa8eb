use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use log::debug;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::BackwardsError;
use crate::sequence::backwards::backwards;

/// Unidade usada ao inverter um texto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Unit
{
    /// Valor escalar Unicode (`char`).
    #[default]
    Char,
    /// Cluster de grafemas estendido: acentos combinantes e emojis compostos
    /// continuam presos ao caractere base.
    Grapheme,
}

impl fmt::Display for Unit
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Unit::Char => write!(f, "char"),
            Unit::Grapheme => write!(f, "grapheme"),
        }
    }
}

impl FromStr for Unit
{
    type Err = BackwardsError;

    fn from_str(value: &str) -> Result<Self, Self::Err>
    {
        match value.trim().to_ascii_lowercase().as_str()
        {
            "char" => Ok(Unit::Char),
            "grapheme" => Ok(Unit::Grapheme),
            _ => Err(BackwardsError::InvalidUnit(value.to_string())),
        }
    }
}

pub fn backwards_graphemes(text: &str) -> String
{
    text.graphemes(true).rev().collect()
}

/// Inverte `text` usando a unidade escolhida.
pub fn backwards_by(text: &str, unit: Unit) -> String
{
    debug!("invertendo {} bytes por {}", text.len(), unit);

    match unit
    {
        Unit::Char => backwards(text),
        Unit::Grapheme => backwards_graphemes(text),
    }
}
