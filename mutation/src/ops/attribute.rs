//! Node attribute operations.
//!
//! The node is looked up root first, then in each bundle; the first scope
//! holding it is edited.

use prov_core::{AttributeSet, AttributeValue, Document, LookupKind, NodeVariant, ScopeId, ValueKind};
use prov_query::locate_node;
use prov_registry::Registry;
use tracing::debug;

use super::edit_scope;
use crate::error::{MutationError, MutationResult};
use crate::validation::validate_node_attribute;
use crate::MutationConfig;

/// Add an attribute to a node, replacing any value under the same key.
pub fn create_attribute(
    registry: &Registry,
    config: &MutationConfig,
    document: &Document,
    variant: NodeVariant,
    id: &str,
    key: &str,
    value: AttributeValue,
) -> MutationResult<Document> {
    validate_node_attribute(registry, config, variant, key, &value)?;
    edit_node(document, variant, id, "create_attribute", |attrs| {
        attrs.insert(key.to_string(), value);
        Ok(())
    })
}

/// Replace the value of an existing attribute, keeping its position.
pub fn set_attribute(
    registry: &Registry,
    config: &MutationConfig,
    document: &Document,
    variant: NodeVariant,
    id: &str,
    key: &str,
    value: AttributeValue,
) -> MutationResult<Document> {
    validate_node_attribute(registry, config, variant, key, &value)?;
    edit_node(document, variant, id, "set_attribute", |attrs| {
        let slot = attrs
            .get_mut(key)
            .ok_or_else(|| MutationError::not_found(LookupKind::Attribute, key, "set_attribute"))?;
        *slot = value;
        Ok(())
    })
}

/// Remove an attribute from a node. Nothing else is touched.
pub fn delete_attribute(
    document: &Document,
    variant: NodeVariant,
    id: &str,
    key: &str,
) -> MutationResult<Document> {
    edit_node(document, variant, id, "delete_attribute", |attrs| {
        attrs
            .shift_remove(key)
            .map(|_| ())
            .ok_or_else(|| MutationError::not_found(LookupKind::Attribute, key, "delete_attribute"))
    })
}

/// Move an attribute's value to a new key, keeping its position.
pub fn rename_attribute(
    registry: &Registry,
    config: &MutationConfig,
    document: &Document,
    variant: NodeVariant,
    id: &str,
    prev_key: &str,
    new_key: &str,
) -> MutationResult<Document> {
    if let Some(value) = locate_node(document, variant, id)
        .and_then(|scope| document.scope(&scope)?.node(variant, id))
        .and_then(|attrs| attrs.get(prev_key))
    {
        validate_node_attribute(registry, config, variant, new_key, value)?;
    }
    edit_node(document, variant, id, "rename_attribute", |attrs| {
        let index = attrs.get_index_of(prev_key).ok_or_else(|| {
            MutationError::not_found(LookupKind::Attribute, prev_key, "rename_attribute")
        })?;
        if prev_key == new_key {
            return Ok(());
        }
        if attrs.contains_key(new_key) {
            return Err(MutationError::already_exists(LookupKind::Attribute, new_key, "rename_attribute"));
        }
        let renamed: AttributeSet = attrs
            .drain(..)
            .enumerate()
            .map(|(i, (key, value))| if i == index { (new_key.to_string(), value) } else { (key, value) })
            .collect();
        *attrs = renamed;
        Ok(())
    })
}

/// Convert an attribute's value to another kind in place.
pub fn retype_attribute(
    registry: &Registry,
    config: &MutationConfig,
    document: &Document,
    variant: NodeVariant,
    id: &str,
    key: &str,
    kind: &ValueKind,
) -> MutationResult<Document> {
    let current = locate_node(document, variant, id)
        .and_then(|scope| document.scope(&scope)?.node(variant, id))
        .ok_or_else(|| MutationError::not_found(LookupKind::Node, id, "retype_attribute"))?
        .get(key)
        .ok_or_else(|| MutationError::not_found(LookupKind::Attribute, key, "retype_attribute"))?;
    let value = current
        .retype(kind)
        .ok_or_else(|| MutationError::type_mismatch(key, kind.to_string(), current.type_name()))?;
    validate_node_attribute(registry, config, variant, key, &value)?;
    edit_node(document, variant, id, "retype_attribute", |attrs| {
        let slot = attrs
            .get_mut(key)
            .ok_or_else(|| MutationError::not_found(LookupKind::Attribute, key, "retype_attribute"))?;
        *slot = value;
        Ok(())
    })
}

/// Apply `edit` to a copy of the node's attribute set.
fn edit_node(
    document: &Document,
    variant: NodeVariant,
    id: &str,
    operation: &'static str,
    edit: impl FnOnce(&mut AttributeSet) -> MutationResult<()>,
) -> MutationResult<Document> {
    let scope: ScopeId = locate_node(document, variant, id)
        .ok_or_else(|| MutationError::not_found(LookupKind::Node, id, operation))?;
    let mut next = document.clone();
    let attrs = edit_scope(&mut next, &scope, operation)?
        .node_mut(variant, id)
        .ok_or_else(|| MutationError::not_found(LookupKind::Node, id, operation))?;
    edit(attrs)?;
    debug!(operation, %variant, id, %scope);
    Ok(next)
}
