//! Error types for the isofield workspace.

use thiserror::Error;

/// Result type alias using FieldError.
pub type FieldResult<T> = Result<T, FieldError>;

/// Primary error type for field rendering operations.
#[derive(Debug, Error)]
pub enum FieldError {
    // === Configuration Errors ===
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),
}

impl FieldError {
    /// Shorthand for configuration validation failures.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        FieldError::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for FieldError {
    fn from(err: std::io::Error) -> Self {
        FieldError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        FieldError::ConfigParse(err.to_string())
    }
}
