//! Existence checks.
//!
//! Each check walks the root scope first, then every bundle.

use prov_core::{Document, NodeVariant, RelationVariant, ScopeId};

/// Check if a node of any variant exists anywhere in the document.
pub fn has_node(document: &Document, id: &str) -> bool {
    NodeVariant::ALL
        .into_iter()
        .any(|variant| has_node_of(document, variant, id))
}

/// Check if a node of a given variant exists anywhere in the document.
pub fn has_node_of(document: &Document, variant: NodeVariant, id: &str) -> bool {
    locate_node(document, variant, id).is_some()
}

pub fn has_agent(document: &Document, id: &str) -> bool {
    has_node_of(document, NodeVariant::Agent, id)
}

pub fn has_activity(document: &Document, id: &str) -> bool {
    has_node_of(document, NodeVariant::Activity, id)
}

pub fn has_entity(document: &Document, id: &str) -> bool {
    has_node_of(document, NodeVariant::Entity, id)
}

/// Check if a node exists in one specific scope, without fallback.
pub fn has_node_in(document: &Document, scope: &ScopeId, variant: NodeVariant, id: &str) -> bool {
    document
        .scope(scope)
        .is_some_and(|s| s.has_node(variant, id))
}

/// Find the first scope holding a node of the given variant.
pub fn locate_node(document: &Document, variant: NodeVariant, id: &str) -> Option<ScopeId> {
    document.find_in_scopes(|s| s.scope.has_node(variant, id).then(|| s.id()))
}

/// Check if a bundle exists under the root or under any bundle.
pub fn has_bundle(document: &Document, id: &str) -> bool {
    locate_bundle(document, id).is_some()
}

/// Find the scope that declares a bundle.
pub fn locate_bundle(document: &Document, id: &str) -> Option<ScopeId> {
    document.find_in_scopes(|s| s.scope.bundle(id).map(|_| s.id()))
}

/// Check if a relation exists, optionally restricted to one variant.
///
/// Without a variant all fourteen relation containers are searched.
pub fn has_relation(document: &Document, id: &str, variant: Option<RelationVariant>) -> bool {
    locate_relation(document, id, variant).is_some()
}

/// Find the first scope and variant holding a relation identifier.
pub fn locate_relation(
    document: &Document,
    id: &str,
    variant: Option<RelationVariant>,
) -> Option<(RelationVariant, ScopeId)> {
    let variants: &[RelationVariant] = match &variant {
        Some(v) => std::slice::from_ref(v),
        None => &RelationVariant::ALL,
    };
    document.find_in_scopes(|s| {
        variants
            .iter()
            .find(|v| s.scope.relation(**v, id).is_some())
            .map(|v| (*v, s.id()))
    })
}
