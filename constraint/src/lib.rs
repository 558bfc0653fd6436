//! PROV Constraint
//!
//! Validate PROV-JSON documents.
//!
//! Responsibilities:
//! - Check the raw document against the structural PROV-JSON schema
//! - Report identifiers and keys whose prefix resolves to no namespace
//! - Report relation endpoints that name no node of the expected variant
//! - Report node-valued attributes (plan, starter, ...) that name no node
//!
//! Findings are [`Diagnostic`] values, never errors: an invalid document is
//! a reportable state. Schema violations short-circuit the referential checks.

mod checker;
mod config;
mod diagnostic;
mod error;
mod schema;

pub use checker::{validate_document, IntegrityValidator};
pub use config::ValidatorConfig;
pub use diagnostic::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use error::{ConstraintError, ConstraintResult};
pub use schema::{prov_schema, SchemaValidator};
