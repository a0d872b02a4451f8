//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema error: {0}")]
    Schema(#[from] coredts_schema::SchemaError),
}
