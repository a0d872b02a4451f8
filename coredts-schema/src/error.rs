//! Error types for schema loading.

use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// JSON decoding error.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document root is not an API object.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

impl SchemaError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
