use thiserror::Error;

use crate::encodings::EncodeError;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] std::env::VarError),

    #[error("(De)Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    EncodeError(#[from] EncodeError),

    #[error("Config error: {0}")]
    ConfigError(#[from] ConfigError),
}
