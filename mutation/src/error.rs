//! Mutation error types.

use prov_core::{CoreError, LookupKind};
use prov_query::QueryError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur during mutation execution.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("{kind} not found: {id} (during {operation})")]
    NotFound {
        kind: LookupKind,
        id: String,
        operation: &'static str,
    },

    #[error("Prefix not found: {prefix} (during {operation})")]
    PrefixNotFound {
        prefix: String,
        operation: &'static str,
    },

    #[error("Invalid value for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("{kind} already exists: {id} (during {operation})")]
    AlreadyExists {
        kind: LookupKind,
        id: String,
        operation: &'static str,
    },

    #[error(transparent)]
    Core(CoreError),
}

impl MutationError {
    pub fn not_found(kind: LookupKind, id: impl Into<String>, operation: &'static str) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
            operation,
        }
    }

    pub fn prefix_not_found(prefix: impl Into<String>, operation: &'static str) -> Self {
        Self::PrefixNotFound {
            prefix: prefix.into(),
            operation,
        }
    }

    pub fn type_mismatch(
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn already_exists(kind: LookupKind, id: impl Into<String>, operation: &'static str) -> Self {
        Self::AlreadyExists {
            kind,
            id: id.into(),
            operation,
        }
    }
}

impl From<CoreError> for MutationError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::NotFound { kind, id, operation } => Self::NotFound { kind, id, operation },
            CoreError::PrefixNotFound { prefix, operation } => {
                Self::PrefixNotFound { prefix, operation }
            }
            other => Self::Core(other),
        }
    }
}

impl From<QueryError> for MutationError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::NotFound { kind, id, operation } => Self::NotFound { kind, id, operation },
            QueryError::Core(core) => core.into(),
        }
    }
}
