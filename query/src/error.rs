//! Query error types.

use prov_core::{CoreError, LookupKind};
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur during query execution.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("{kind} not found: {id} (during {operation})")]
    NotFound {
        kind: LookupKind,
        id: String,
        operation: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl QueryError {
    pub fn not_found(kind: LookupKind, id: impl Into<String>, operation: &'static str) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
            operation,
        }
    }

    pub fn node_not_found(id: impl Into<String>, operation: &'static str) -> Self {
        Self::not_found(LookupKind::Node, id, operation)
    }

    /// Returns true if this error reports a missing object.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            QueryError::NotFound { .. } | QueryError::Core(CoreError::NotFound { .. })
        )
    }
}
