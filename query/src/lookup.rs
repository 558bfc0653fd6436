//! Node, attribute and name lookups.

use std::sync::Arc;

use prov_core::{expand_identifier, AttributeSet, AttributeValue, Document, NodeVariant, ScopeId};
use prov_registry::AttributeDef;

use crate::{QueryError, QueryResult};

/// Variant probing order used by [`get_node_variant`].
const VARIANT_PROBE_ORDER: [NodeVariant; 3] =
    [NodeVariant::Entity, NodeVariant::Activity, NodeVariant::Agent];

/// Get a node's attribute set, whatever its variant.
///
/// The root scope is searched first, then each bundle; within a scope the
/// variants are probed entity, activity, agent.
pub fn get_node_value<'d>(document: &'d Document, id: &str) -> QueryResult<&'d Arc<AttributeSet>> {
    locate_any_node(document, id)
        .and_then(|(variant, scope)| document.scope(&scope)?.node(variant, id))
        .ok_or_else(|| QueryError::node_not_found(id, "get_node_value"))
}

/// Get a node's attribute set for a known variant.
pub fn get_node_value_of<'d>(
    document: &'d Document,
    variant: NodeVariant,
    id: &str,
) -> QueryResult<&'d Arc<AttributeSet>> {
    document
        .find_in_scopes(|s| s.scope.node(variant, id))
        .ok_or_else(|| QueryError::node_not_found(id, "get_node_value"))
}

/// Get a node's attribute set in one specific scope.
pub fn node_in<'d>(
    document: &'d Document,
    scope: &ScopeId,
    variant: NodeVariant,
    id: &str,
) -> Option<&'d Arc<AttributeSet>> {
    document.scope(scope)?.node(variant, id)
}

/// Find the variant and scope of the first node carrying `id`.
pub fn locate_any_node(document: &Document, id: &str) -> Option<(NodeVariant, ScopeId)> {
    document.find_in_scopes(|s| {
        VARIANT_PROBE_ORDER
            .into_iter()
            .find(|v| s.scope.has_node(*v, id))
            .map(|v| (v, s.id()))
    })
}

/// Discover the variant of a node.
///
/// Entity is tried first, then activity, then agent, each across every scope.
pub fn get_node_variant(document: &Document, id: &str) -> QueryResult<NodeVariant> {
    VARIANT_PROBE_ORDER
        .into_iter()
        .find(|v| crate::has_node_of(document, *v, id))
        .ok_or_else(|| QueryError::node_not_found(id, "get_node_variant"))
}

/// Expand an identifier to its full IRI.
///
/// The namespace is resolved in the scope where the node lives, so a
/// bundle-local prefix wins for bundle nodes. Identifiers that are not
/// nodes resolve against the root. Unresolved prefixes yield the raw id.
pub fn get_full_name(document: &Document, id: &str) -> String {
    let scope = locate_any_node(document, id).map(|(_, scope)| scope);
    let bundle = scope.as_ref().and_then(ScopeId::bundle);
    expand_identifier(document, id, bundle)
}

/// Read a catalogued attribute of a node.
///
/// The first scope holding the node decides: if that node lacks the
/// attribute the result is `None`, as it is when the node is absent.
pub fn get_attribute_value<'d>(
    document: &'d Document,
    variant: NodeVariant,
    id: &str,
    attribute: &AttributeDef,
) -> Option<&'d AttributeValue> {
    get_attribute(document, variant, id, attribute.key)
}

/// Read any attribute of a node by key.
pub fn get_attribute<'d>(
    document: &'d Document,
    variant: NodeVariant,
    id: &str,
    key: &str,
) -> Option<&'d AttributeValue> {
    document
        .find_in_scopes(|s| s.scope.node(variant, id))
        .and_then(|node| node.get(key))
}
