//! Namespace (prefix map) operations.

use prov_core::{Document, LookupKind, ScopeId};
use tracing::debug;

use super::edit_scope;
use crate::error::{MutationError, MutationResult};

/// Declare a prefix in the root or a bundle's prefix map.
///
/// An existing declaration is overwritten.
pub fn create_namespace(
    document: &Document,
    prefix: &str,
    value: &str,
    bundle: Option<&str>,
) -> MutationResult<Document> {
    let scope = ScopeId::from_bundle(bundle);
    let mut next = document.clone();
    edit_scope(&mut next, &scope, "create_namespace")?
        .prefixes_mut()
        .insert(prefix.to_string(), value.to_string());
    debug!(operation = "create_namespace", prefix, value, %scope);
    Ok(next)
}

/// Change the URI of a declared prefix.
pub fn update_namespace(
    document: &Document,
    prefix: &str,
    value: &str,
    bundle: Option<&str>,
) -> MutationResult<Document> {
    let scope = ScopeId::from_bundle(bundle);
    let declared = document
        .scope(&scope)
        .ok_or_else(|| {
            MutationError::not_found(LookupKind::Bundle, bundle.unwrap_or("root"), "update_namespace")
        })?
        .prefix_value(prefix);
    match declared {
        Some(current) if current == value => return Ok(document.clone()),
        Some(_) => {}
        None => return Err(MutationError::prefix_not_found(prefix, "update_namespace")),
    }

    let mut next = document.clone();
    if let Some(uri) = edit_scope(&mut next, &scope, "update_namespace")?
        .prefixes_mut()
        .get_mut(prefix)
    {
        *uri = value.to_string();
    }
    debug!(operation = "update_namespace", prefix, value, %scope);
    Ok(next)
}

/// Remove a prefix declaration. Removing an undeclared prefix is a no-op.
pub fn delete_namespace(document: &Document, prefix: &str, bundle: Option<&str>) -> Document {
    let scope = ScopeId::from_bundle(bundle);
    let declared = document
        .scope(&scope)
        .is_some_and(|s| s.prefix_value(prefix).is_some());
    if !declared {
        return document.clone();
    }
    let mut next = document.clone();
    if let Some(target) = next.scope_mut(&scope) {
        target.prefixes_mut().shift_remove(prefix);
    }
    debug!(operation = "delete_namespace", prefix, %scope);
    next
}
