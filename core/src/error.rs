//! Common error types for the PROV engine.

use std::fmt;
use thiserror::Error;

/// What kind of object a failed lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    Node,
    Relation,
    Bundle,
    Attribute,
    Prefix,
}

impl fmt::Display for LookupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LookupKind::Node => "Node",
            LookupKind::Relation => "Relation",
            LookupKind::Bundle => "Bundle",
            LookupKind::Attribute => "Attribute",
            LookupKind::Prefix => "Prefix",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while reading or resolving a document.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required identifier is absent from every searched scope.
    #[error("{kind} not found: {id} (during {operation})")]
    NotFound {
        kind: LookupKind,
        id: String,
        operation: &'static str,
    },

    /// A prefix is not declared in the searched prefix map(s).
    #[error("Prefix not found: {prefix} (during {operation})")]
    PrefixNotFound {
        prefix: String,
        operation: &'static str,
    },

    /// The document declares no global namespace at all.
    #[error("Document declares no namespace")]
    NoNamespace,

    /// The document could not be decoded from JSON.
    #[error("Malformed document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CoreError {
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
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
