use freight_models::{ConfigError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Load #{index} ({load_id}) failed validation: {source}")]
    Validation {
        index: usize,
        load_id: String,
        #[source]
        source: ValidationError,
    },

    #[error("Load #{index} is malformed: {source}")]
    Malformed {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input error: {0}")]
    Input(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
