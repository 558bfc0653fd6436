//! Mutation operation implementations.
//!
//! Each operation family is implemented in its own module. Every function
//! takes the current document by reference and returns the next one.

mod attribute;
mod bundle;
mod namespace;
mod node;
mod relation;
mod rename;

pub use attribute::{
    create_attribute, delete_attribute, rename_attribute, retype_attribute, set_attribute,
};
pub use bundle::{create_bundle, delete_bundle};
pub use namespace::{create_namespace, delete_namespace, update_namespace};
pub use node::{create_node, create_node_in, delete_node, move_node};
pub use relation::{
    create_relation, create_relation_in, delete_relation, delete_relation_attribute,
    set_relation_attribute,
};
pub use rename::{rename_identifier, rename_prefix};

use prov_core::{Document, LookupKind, Scope, ScopeId};

use crate::error::{MutationError, MutationResult};

/// Open one scope of a (cloned) document for copy-on-write editing.
///
/// Only a missing bundle can fail; the root always exists.
pub(crate) fn edit_scope<'d>(
    document: &'d mut Document,
    scope: &ScopeId,
    operation: &'static str,
) -> MutationResult<&'d mut Scope> {
    document.scope_mut(scope).ok_or_else(|| {
        MutationError::not_found(LookupKind::Bundle, scope.bundle().unwrap_or("root"), operation)
    })
}
