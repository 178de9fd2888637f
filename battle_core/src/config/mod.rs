//! Configuration loading - formula constants and condition definitions

mod conditions;
mod constants;

pub use conditions::{load_condition_configs, parse_condition_configs, ConditionsConfig};
pub use constants::{
    constants, ensure_constants_initialized, init_constants, init_constants_default,
    ElementMatchup, FormulaConstants,
};

use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Error loading battle configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub(crate) fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_toml(&content)
}

pub(crate) fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
