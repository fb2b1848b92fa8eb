use std::env;

use dotenvy::dotenv;
use log::debug;

use crate::errors::BackwardsError;
use crate::sequence::unit::Unit;

pub const UNIT_VAR: &str = "BACKWARDS_UNIT";

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config
{
    pub unit: Unit,
}

impl Config
{
    /// Carrega o `.env` e lê as variáveis do processo.
    pub fn from_env() -> Result<Self, BackwardsError>
    {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de busca qualquer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BackwardsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let unit = match lookup(UNIT_VAR)
        {
            Some(value) => value.parse()?,
            None => Unit::default(),
        };

        debug!("{} = {}", UNIT_VAR, unit);
        Ok(Self { unit })
    }

    /// Aplica o valor vindo da linha de comando, que tem prioridade.
    pub fn with_unit(mut self, unit: Option<Unit>) -> Self
    {
        if let Some(unit) = unit
        {
            self.unit = unit;
        }
        self
    }
}
