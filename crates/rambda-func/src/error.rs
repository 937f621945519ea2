use thiserror::Error;

use crate::config::ConfigError;

pub type Result<T> = std::result::Result<T, FuncError>;

#[derive(Error, Debug)]
pub enum FuncError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
