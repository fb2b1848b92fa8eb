use std::io::Error as IoError;
use std::string::FromUtf8Error;

use serde_json::Error as SerdeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackwardsError
{
    #[error("nenhuma entrada informada: passe um texto como argumento ou via stdin")]
    MissingInput,

    #[error("a entrada não é um texto UTF-8 válido: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("unidade de inversão desconhecida: '{0}' (use 'char' ou 'grapheme')")]
    InvalidUnit(String),

    #[error("falha de E/S: {0}")]
    Io(#[from] IoError),

    #[error("falha ao serializar JSON: {0}")]
    Json(#[from] SerdeError),
}

impl BackwardsError
{
    /// Código de saída usado pelo binário quando este erro chega ao `main`.
    pub fn exit_code(&self) -> u8
    {
        match *self
        {
            BackwardsError::MissingInput => 2,
            BackwardsError::InvalidUtf8(_) | BackwardsError::InvalidUnit(_) => 65,
            BackwardsError::Io(_) => 74,
            BackwardsError::Json(_) => 70,
        }
    }
}
