//! Error type definitions

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, PermissionError>;

/// Main error type for permission evaluation and field sorting
#[derive(Error, Debug)]
pub enum PermissionError {
    /// A permission payload does not match the shape its manager expects
    #[error("Invalid payload for permission manager '{manager}': {reason}")]
    InvalidPayload {
        manager: &'static str,
        reason: String,
    },

    /// No permission manager is registered under the given type key
    #[error("Unknown permission manager: {0}")]
    UnknownManager(String),

    /// No field type is registered under the given type key
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
