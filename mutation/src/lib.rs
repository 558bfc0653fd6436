//! PROV Mutation
//!
//! Write operations over PROV-JSON documents.
//!
//! Responsibilities:
//! - Create, delete and move nodes, with relation cascades on delete
//! - Document-wide identifier and prefix renames
//! - Namespace, attribute, relation and bundle edits
//! - Value-range checks for catalogued attribute keys
//!
//! Every operation takes the current document by reference and returns a new
//! one. Untouched subtrees are shared with the input (`Arc::ptr_eq` holds).
//!
//! # Module Structure
//!
//! - `executor` - Main MutationExecutor that carries the registry and config
//! - `ops/` - Individual operation families (node, rename, namespace, attribute, relation, bundle)
//! - `validation` - Value-range checks shared by the attribute operations
//! - `config` - Mutation options
//! - `error` - Error types for mutation failures

mod config;
mod error;
mod executor;
pub mod ops;
mod validation;

pub use config::MutationConfig;
pub use error::{MutationError, MutationResult};
pub use executor::MutationExecutor;
