use std::path::PathBuf;

use crate::types::ColorMode;

#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("not a valid gradient: {0}")]
    Parse(String),

    #[error("color mode `{0}` is disabled")]
    ModeDisabled(ColorMode),

    #[error("serialization error: {0}")]
    Serialize(String),
}
