use thiserror::Error;
use std::io::Error as IoError;
use toml::de::Error as TomlError;

#[derive(Error, Debug)]
pub enum CostError {
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] TomlError),

    #[error("Invalid reference data: {0}")]
    InvalidReference(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown printer: {0}")]
    UnknownPrinter(String),

    #[error("Unknown accessory: {0}")]
    UnknownAccessory(String),

    #[error("Unknown filament type: {0}")]
    UnknownFilament(String),
}

pub type Result<T> = std::result::Result<T, CostError>;
