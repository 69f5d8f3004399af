//! Error types

use dice_core::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// A raw profile field that cannot be normalized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be an integer, got \"{value}\"")]
    NotAnInteger { field: &'static str, value: String },
    #[error("Field '{field}' must be an integer or dice notation, got \"{value}\"")]
    InvalidQuantity { field: &'static str, value: String },
    #[error("Field '{field}' has invalid dice notation: {source}")]
    Dice {
        field: &'static str,
        #[source]
        source: ParseError,
    },
    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Error loading or validating simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error returned by the combat resolver
#[derive(Debug, Error)]
pub enum CombatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
