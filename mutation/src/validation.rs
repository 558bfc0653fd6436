//! Attribute validation helpers for mutation operations.

use prov_core::{AttributeValue, NodeVariant, RelationVariant};
use prov_registry::{AttributeDef, Registry};

use crate::error::{MutationError, MutationResult};
use crate::MutationConfig;

/// Check a node attribute value against its catalogued range.
///
/// Keys outside the catalog, or not applicable to `variant`, are free-form.
pub fn validate_node_attribute(
    registry: &Registry,
    config: &MutationConfig,
    variant: NodeVariant,
    key: &str,
    value: &AttributeValue,
) -> MutationResult<()> {
    if !config.enforce_value_ranges {
        return Ok(());
    }
    check_range(registry.node_attribute(variant, key), key, value)
}

/// Check a relation attribute value against its catalogued range.
pub fn validate_relation_attribute(
    registry: &Registry,
    config: &MutationConfig,
    variant: RelationVariant,
    key: &str,
    value: &AttributeValue,
) -> MutationResult<()> {
    if !config.enforce_value_ranges {
        return Ok(());
    }
    check_range(registry.relation_attribute(variant, key), key, value)
}

fn check_range(def: Option<&AttributeDef>, key: &str, value: &AttributeValue) -> MutationResult<()> {
    match def {
        Some(def) if !def.range.accepts(value) => Err(MutationError::type_mismatch(
            key,
            def.range.to_string(),
            value.type_name(),
        )),
        _ => Ok(()),
    }
}
