//! PROV Registry
//!
//! Static definition tables. Single source of truth for relation roles and
//! well-known attribute keys. The tables are constants; lookups never fail
//! except by returning `None` for keys outside the catalog.

mod catalog;
mod registry;
mod types;

pub use prov_core::{is_node_variant, NodeVariant, RelationVariant};
pub use registry::Registry;
pub use types::*;
