//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur while setting up validation.
///
/// Problems found in a document are diagnostics, not errors.
#[derive(Debug, Clone, Error)]
pub enum ConstraintError {
    #[error("Invalid schema: {message}")]
    InvalidSchema { message: String },
}

impl ConstraintError {
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }
}
