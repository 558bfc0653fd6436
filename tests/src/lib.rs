//! PROV Tests
//!
//! Scenario harness for end-to-end tests of the document engine.
//!
//! A [`Scenario`] starts from a seed document and applies named mutation
//! steps in order. Each step carries an [`Assertion`] checked against the
//! document it produced (or the error it raised). A failing step leaves the
//! current document unchanged, so later steps continue from the last success.
//!
//! # Module Structure
//!
//! - `scenario` - Scenario builder and runner
//! - `assertion` - Per-step expectations
//! - `fixtures` - Shared seed documents
//! - `error` - Harness failures

mod assertion;
mod error;
pub mod fixtures;

pub use assertion::Assertion;
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Scenario, Step};

/// Everything a test file needs.
pub mod prelude {
    pub use crate::fixtures;
    pub use crate::{Assertion, Scenario, ScenarioError, ScenarioResult};
    pub use prov_constraint::{validate_document, DiagnosticKind, Diagnostics, IntegrityValidator};
    pub use prov_core::{Document, NodeVariant, RelationVariant, ScopeId, ValueKind};
    pub use prov_mutation::{MutationConfig, MutationError, MutationExecutor};
    pub use prov_registry::Registry;
    pub use serde_json::json;
}
