//! Node operations - create, delete with relation cascade, move between scopes.

use std::sync::Arc;

use prov_core::{qualify, Document, LookupKind, NodeVariant, RelationVariant, ScopeId};
use prov_query::{locate_node, references_node};
use tracing::debug;

use super::edit_scope;
use crate::error::{MutationError, MutationResult};
use crate::MutationConfig;

/// Create an empty node at `{prefix}:{name}` in the root scope.
///
/// An existing node with the same identifier is replaced.
pub fn create_node(
    config: &MutationConfig,
    document: &Document,
    variant: NodeVariant,
    prefix: &str,
    name: &str,
) -> Document {
    let id = node_identifier(config, prefix, name);
    debug!(operation = "create_node", %variant, %id);
    let mut next = document.clone();
    next.root_mut().nodes_mut(variant).insert(id, Arc::default());
    next
}

/// Create an empty node inside a specific scope.
pub fn create_node_in(
    config: &MutationConfig,
    document: &Document,
    scope: &ScopeId,
    variant: NodeVariant,
    prefix: &str,
    name: &str,
) -> MutationResult<Document> {
    let id = node_identifier(config, prefix, name);
    debug!(operation = "create_node", %variant, %id, %scope);
    let mut next = document.clone();
    edit_scope(&mut next, scope, "create_node")?
        .nodes_mut(variant)
        .insert(id, Arc::default());
    Ok(next)
}

fn node_identifier(config: &MutationConfig, prefix: &str, name: &str) -> String {
    if config.qualify_default_prefix {
        format!("{}:{}", prefix, name)
    } else {
        qualify(prefix, name)
    }
}

/// Delete a node and every relation that references it.
///
/// The node is removed from the first scope holding it. Relations are
/// removed from every scope, whichever endpoint names the node.
pub fn delete_node(document: &Document, variant: NodeVariant, id: &str) -> MutationResult<Document> {
    let scope = locate_node(document, variant, id)
        .ok_or_else(|| MutationError::not_found(LookupKind::Node, id, "delete_node"))?;
    let dependents = dependent_relations(document, id);

    let mut next = document.clone();
    edit_scope(&mut next, &scope, "delete_node")?
        .nodes_mut(variant)
        .shift_remove(id);
    for (relation_scope, relation_variant, relation_id) in &dependents {
        if let Some(target) = next.scope_mut(relation_scope) {
            target.relations_mut(*relation_variant).shift_remove(relation_id);
        }
    }

    debug!(
        operation = "delete_node",
        %variant,
        id,
        %scope,
        cascaded = dependents.len(),
        "node deleted"
    );
    Ok(next)
}

/// Relations in any scope with an endpoint equal to `node_id`.
fn dependent_relations(document: &Document, node_id: &str) -> Vec<(ScopeId, RelationVariant, String)> {
    let mut found = Vec::new();
    for s in document.scopes() {
        for (variant, container) in s.scope.relation_containers() {
            for (relation_id, record) in container.iter() {
                if references_node(variant, record, node_id) {
                    found.push((s.id(), variant, relation_id.clone()));
                }
            }
        }
    }
    found
}

/// Move a node's record from one scope to another.
///
/// The record itself is shared, not copied.
pub fn move_node(
    document: &Document,
    from: &ScopeId,
    to: &ScopeId,
    variant: NodeVariant,
    id: &str,
) -> MutationResult<Document> {
    let record = document
        .scope(from)
        .and_then(|s| s.node(variant, id))
        .cloned()
        .ok_or_else(|| MutationError::not_found(LookupKind::Node, id, "move_node"))?;
    let destination = document.scope(to).ok_or_else(|| {
        MutationError::not_found(LookupKind::Bundle, to.bundle().unwrap_or("root"), "move_node")
    })?;
    if from == to {
        return Ok(document.clone());
    }
    if destination.has_node(variant, id) {
        return Err(MutationError::already_exists(LookupKind::Node, id, "move_node"));
    }

    let mut next = document.clone();
    edit_scope(&mut next, from, "move_node")?
        .nodes_mut(variant)
        .shift_remove(id);
    edit_scope(&mut next, to, "move_node")?
        .nodes_mut(variant)
        .insert(id.to_string(), record);

    debug!(operation = "move_node", %variant, id, %from, %to);
    Ok(next)
}
