//! Relation operations.

use std::sync::Arc;

use prov_core::{attrs, AttributeSet, AttributeValue, Document, LookupKind, RelationVariant, ScopeId};
use prov_query::locate_relation;
use prov_registry::Registry;
use tracing::debug;

use super::edit_scope;
use crate::error::{MutationError, MutationResult};
use crate::validation::validate_relation_attribute;
use crate::MutationConfig;

/// Create a relation in the root scope.
///
/// The record holds the two endpoint keys of the variant. Endpoints are not
/// required to exist; dangling ones are reported by validation.
pub fn create_relation(
    registry: &Registry,
    document: &Document,
    variant: RelationVariant,
    relation_id: &str,
    domain_id: &str,
    range_id: &str,
) -> Document {
    let record = endpoint_record(registry, variant, domain_id, range_id);
    debug!(operation = "create_relation", %variant, relation_id, domain_id, range_id);
    let mut next = document.clone();
    next.root_mut()
        .relations_mut(variant)
        .insert(relation_id.to_string(), Arc::new(record));
    next
}

/// Create a relation inside a specific scope.
pub fn create_relation_in(
    registry: &Registry,
    document: &Document,
    scope: &ScopeId,
    variant: RelationVariant,
    relation_id: &str,
    domain_id: &str,
    range_id: &str,
) -> MutationResult<Document> {
    let record = endpoint_record(registry, variant, domain_id, range_id);
    let mut next = document.clone();
    edit_scope(&mut next, scope, "create_relation")?
        .relations_mut(variant)
        .insert(relation_id.to_string(), Arc::new(record));
    debug!(operation = "create_relation", %variant, relation_id, domain_id, range_id, %scope);
    Ok(next)
}

fn endpoint_record(
    registry: &Registry,
    variant: RelationVariant,
    domain_id: &str,
    range_id: &str,
) -> AttributeSet {
    let def = registry.relation(variant);
    attrs! {
        def.domain.key => domain_id,
        def.range.key => range_id,
    }
}

/// Delete a relation by identifier from the first scope holding it.
pub fn delete_relation(
    document: &Document,
    variant: RelationVariant,
    relation_id: &str,
) -> MutationResult<Document> {
    let scope = find_relation(document, variant, relation_id, "delete_relation")?;
    let mut next = document.clone();
    edit_scope(&mut next, &scope, "delete_relation")?
        .relations_mut(variant)
        .shift_remove(relation_id);
    debug!(operation = "delete_relation", %variant, relation_id, %scope);
    Ok(next)
}

/// Set an attribute on a relation, e.g. `prov:time` or `prov:plan`.
pub fn set_relation_attribute(
    registry: &Registry,
    config: &MutationConfig,
    document: &Document,
    variant: RelationVariant,
    relation_id: &str,
    key: &str,
    value: AttributeValue,
) -> MutationResult<Document> {
    validate_relation_attribute(registry, config, variant, key, &value)?;
    edit_relation(document, variant, relation_id, "set_relation_attribute", |record| {
        record.insert(key.to_string(), value);
        Ok(())
    })
}

/// Remove an attribute from a relation.
pub fn delete_relation_attribute(
    document: &Document,
    variant: RelationVariant,
    relation_id: &str,
    key: &str,
) -> MutationResult<Document> {
    edit_relation(document, variant, relation_id, "delete_relation_attribute", |record| {
        record.shift_remove(key).map(|_| ()).ok_or_else(|| {
            MutationError::not_found(LookupKind::Attribute, key, "delete_relation_attribute")
        })
    })
}

fn find_relation(
    document: &Document,
    variant: RelationVariant,
    relation_id: &str,
    operation: &'static str,
) -> MutationResult<ScopeId> {
    locate_relation(document, relation_id, Some(variant))
        .map(|(_, scope)| scope)
        .ok_or_else(|| MutationError::not_found(LookupKind::Relation, relation_id, operation))
}

fn edit_relation(
    document: &Document,
    variant: RelationVariant,
    relation_id: &str,
    operation: &'static str,
    edit: impl FnOnce(&mut AttributeSet) -> MutationResult<()>,
) -> MutationResult<Document> {
    let scope = find_relation(document, variant, relation_id, operation)?;
    let mut next = document.clone();
    let record = edit_scope(&mut next, &scope, operation)?
        .relation_mut(variant, relation_id)
        .ok_or_else(|| MutationError::not_found(LookupKind::Relation, relation_id, operation))?;
    edit(record)?;
    debug!(operation, %variant, relation_id, %scope);
    Ok(next)
}
