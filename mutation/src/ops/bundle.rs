//! Bundle operations.

use std::sync::Arc;

use prov_core::{Document, LookupKind};
use tracing::debug;

use crate::error::{MutationError, MutationResult};

/// Add an empty bundle under the root.
pub fn create_bundle(document: &Document, bundle_id: &str) -> MutationResult<Document> {
    if document.bundle(bundle_id).is_some() {
        return Err(MutationError::already_exists(LookupKind::Bundle, bundle_id, "create_bundle"));
    }
    let mut next = document.clone();
    next.root_mut()
        .bundles_mut()
        .insert(bundle_id.to_string(), Arc::default());
    debug!(operation = "create_bundle", bundle_id);
    Ok(next)
}

/// Remove a bundle and everything inside it.
///
/// Root-level relations pointing into the bundle are left in place.
pub fn delete_bundle(document: &Document, bundle_id: &str) -> MutationResult<Document> {
    if document.bundle(bundle_id).is_none() {
        return Err(MutationError::not_found(LookupKind::Bundle, bundle_id, "delete_bundle"));
    }
    let mut next = document.clone();
    next.root_mut().bundles_mut().shift_remove(bundle_id);
    debug!(operation = "delete_bundle", bundle_id);
    Ok(next)
}
