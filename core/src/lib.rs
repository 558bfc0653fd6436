//! PROV Core Types
//!
//! This crate provides the foundational types used throughout the PROV engine:
//! - Node and relation variants (the three PROV object kinds, the 14 relation kinds)
//! - Attribute values (the tagged union of PROV-JSON literals)
//! - The document model (scopes, bundles, containers) with copy-on-write sharing
//! - Identifier parsing and namespace resolution
//! - Common error types

mod document;
mod error;
mod id;
mod namespace;
mod value;
mod variant;

pub use document::*;
pub use error::*;
pub use id::*;
pub use namespace::*;
pub use value::*;
pub use variant::*;
