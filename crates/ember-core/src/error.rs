//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Invalid pool capacity: must be >= 1, got {0}")]
    InvalidCapacity(usize),

    #[error("Invalid visit limit: maxVisits must be >= 1, got {0}")]
    InvalidVisitLimit(usize),

    #[error("Invalid gradient step count: must be >= 1, got {0}")]
    InvalidStepCount(u32),

    #[error("Gradient entry {index}: steps() without source color")]
    MissingSourceColor { index: usize },

    #[error("Gradient entry {index}: steps() without target color")]
    MissingTargetColor { index: usize },

    #[error("Color ramp must contain at least one color")]
    EmptyColorRamp,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Shape error: {0}")]
    ShapeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}
