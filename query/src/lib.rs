//! PROV Query
//!
//! Read-only operations over a PROV-JSON document.
//!
//! Responsibilities:
//! - Existence checks for nodes, bundles and relations
//! - Node, attribute and full-name lookups
//! - Relation traversal (outgoing, incoming, range-by-domain)
//! - Unique identifier generation
//!
//! Every "search everywhere" query walks the root scope first, then each
//! bundle in declaration order, and returns the first match. The `locate_*`
//! and `*_in` variants expose or pin the scope for callers that need to
//! disambiguate identifiers reused across bundles.

mod error;
mod existence;
mod generate;
mod lookup;
mod traversal;

pub use error::{QueryError, QueryResult};
pub use existence::*;
pub use generate::*;
pub use lookup::*;
pub use traversal::*;
