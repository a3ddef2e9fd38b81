//! Error types for the document model.

use thiserror::Error;

/// Errors raised while building framework documents.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// A boost was zero, negative or not a finite number.
    #[error("Invalid boost: {0} (must be a finite value > 0)")]
    InvalidBoost(f32),

    /// A field id had no registered descriptor.
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl DocumentError {
    /// Create an unknown field error.
    pub fn unknown_field(id: impl Into<String>) -> Self {
        Self::UnknownField(id.into())
    }
}
