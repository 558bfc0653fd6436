//! Relation traversal and listing.

use std::sync::Arc;

use prov_core::{AttributeSet, AttributeValue, Document, LookupKind, NodeVariant, RelationVariant, ScopeId};
use prov_registry::Registry;

use crate::{QueryError, QueryResult};

/// A relation instance found in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationRef<'d> {
    /// Scope the relation container lives in.
    pub scope: ScopeId,
    pub variant: RelationVariant,
    pub id: &'d str,
    pub record: &'d Arc<AttributeSet>,
}

impl<'d> RelationRef<'d> {
    /// The domain endpoint identifier, if present and a string.
    pub fn domain(&self) -> Option<&'d str> {
        domain_of(self.variant, self.record)
    }

    /// The range endpoint identifier, if present and a string.
    pub fn range(&self) -> Option<&'d str> {
        range_of(self.variant, self.record)
    }
}

/// Read the domain endpoint of a relation record.
pub fn domain_of(variant: RelationVariant, record: &AttributeSet) -> Option<&str> {
    let key = Registry::prov().relation(variant).domain.key;
    record.get(key).and_then(AttributeValue::as_str)
}

/// Read the range endpoint of a relation record.
pub fn range_of(variant: RelationVariant, record: &AttributeSet) -> Option<&str> {
    let key = Registry::prov().relation(variant).range.key;
    record.get(key).and_then(AttributeValue::as_str)
}

/// Check if either endpoint of a relation record is `node_id`.
pub fn references_node(variant: RelationVariant, record: &AttributeSet, node_id: &str) -> bool {
    domain_of(variant, record) == Some(node_id) || range_of(variant, record) == Some(node_id)
}

// ==================== Traversal ====================

/// Relations in one scope whose domain endpoint is `node_id`.
///
/// Bundles below the scope are not searched. An unknown scope yields nothing.
pub fn get_outgoing_relations<'d>(
    document: &'d Document,
    scope: &ScopeId,
    node_id: &str,
) -> Vec<RelationRef<'d>> {
    relations_in_scope(document, scope, |variant, record| {
        domain_of(variant, record) == Some(node_id)
    })
}

/// Relations in one scope whose range endpoint is `node_id`.
pub fn get_incoming_relations<'d>(
    document: &'d Document,
    scope: &ScopeId,
    node_id: &str,
) -> Vec<RelationRef<'d>> {
    relations_in_scope(document, scope, |variant, record| {
        range_of(variant, record) == Some(node_id)
    })
}

fn relations_in_scope<'d>(
    document: &'d Document,
    scope: &ScopeId,
    mut keep: impl FnMut(RelationVariant, &AttributeSet) -> bool,
) -> Vec<RelationRef<'d>> {
    let Some(target) = document.scope(scope) else {
        return Vec::new();
    };
    let mut found = Vec::new();
    for (variant, container) in target.relation_containers() {
        for (id, record) in container.iter() {
            if keep(variant, record) {
                found.push(RelationRef {
                    scope: scope.clone(),
                    variant,
                    id: id.as_str(),
                    record,
                });
            }
        }
    }
    found
}

/// Range endpoints of every `variant` relation whose domain is `domain_id`.
///
/// Root relations come first, then each bundle's, in declaration order.
pub fn get_relation_range_with_domain<'d>(
    document: &'d Document,
    variant: RelationVariant,
    domain_id: &str,
) -> Vec<&'d str> {
    list_relations(document, variant)
        .into_iter()
        .filter(|relation| relation.domain() == Some(domain_id))
        .filter_map(|relation| relation.range())
        .collect()
}

// ==================== Listing ====================

/// Every node identifier of a variant, with the scope holding it.
pub fn list_nodes(document: &Document, variant: NodeVariant) -> Vec<(ScopeId, &str)> {
    document
        .scopes()
        .flat_map(|s| {
            s.scope
                .nodes(variant)
                .into_iter()
                .flat_map(|c| c.keys())
                .map(move |id| (s.id(), id.as_str()))
        })
        .collect()
}

/// Identifiers of the bundles directly under the root.
pub fn list_bundles(document: &Document) -> Vec<&str> {
    document
        .root()
        .bundles()
        .into_iter()
        .flat_map(|b| b.keys())
        .map(String::as_str)
        .collect()
}

/// Every relation of a variant, root first, then each bundle.
pub fn list_relations(document: &Document, variant: RelationVariant) -> Vec<RelationRef<'_>> {
    document
        .scopes()
        .flat_map(|s| {
            s.scope
                .relations(variant)
                .into_iter()
                .flat_map(|c| c.iter())
                .map(move |(id, record)| RelationRef {
                    scope: s.id(),
                    variant,
                    id: id.as_str(),
                    record,
                })
        })
        .collect()
}

/// Get the first relation carrying `id`, of any variant.
pub fn get_relation<'d>(document: &'d Document, id: &str) -> QueryResult<RelationRef<'d>> {
    document
        .find_in_scopes(|s| {
            s.scope.relation_containers().find_map(|(variant, container)| {
                container.get_key_value(id).map(|(key, record)| RelationRef {
                    scope: s.id(),
                    variant,
                    id: key.as_str(),
                    record,
                })
            })
        })
        .ok_or_else(|| QueryError::not_found(LookupKind::Relation, id, "get_relation"))
}
