use crate::models::ModifierKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FarmError {
    #[error("Unknown {kind} level '{level}' for plant {plant}")]
    UnknownLevel {
        plant: String,
        kind: ModifierKind,
        level: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, FarmError>;
