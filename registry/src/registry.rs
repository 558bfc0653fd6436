//! The Registry - immutable definition lookup.

use crate::catalog::{ATTRIBUTES, RELATIONS};
use crate::{AttributeDef, RelationDef};
use prov_core::{NodeVariant, RelationVariant};

/// The Registry provides lookup of the static PROV definitions.
/// It is a zero-cost view over constant tables.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    relations: &'static [RelationDef; 14],
    attributes: &'static [AttributeDef],
}

static PROV: Registry = Registry {
    relations: &RELATIONS,
    attributes: ATTRIBUTES,
};

impl Registry {
    /// The standard PROV registry.
    pub fn prov() -> &'static Registry {
        &PROV
    }

    // ==================== Node Variant Lookups ====================

    /// All node variants.
    pub fn node_variants(&self) -> &'static [NodeVariant; 3] {
        &NodeVariant::ALL
    }

    /// Check if a container key names a node variant.
    pub fn is_node_variant(&self, key: &str) -> bool {
        NodeVariant::from_key(key).is_some()
    }

    // ==================== Relation Lookups ====================

    /// All relation variants.
    pub fn relation_variants(&self) -> &'static [RelationVariant; 14] {
        &RelationVariant::ALL
    }

    /// Get the definition of a relation variant.
    pub fn relation(&self, variant: RelationVariant) -> &'static RelationDef {
        // RELATIONS is laid out in declaration order of RelationVariant.
        &self.relations[variant as usize]
    }

    /// Get a relation definition by container key.
    pub fn relation_by_key(&self, key: &str) -> Option<&'static RelationDef> {
        RelationVariant::from_key(key).map(|v| self.relation(v))
    }

    /// Get all relation definitions.
    pub fn all_relations(&self) -> impl Iterator<Item = &'static RelationDef> {
        self.relations.iter()
    }

    // ==================== Attribute Lookups ====================

    /// Get all attribute definitions.
    pub fn all_attributes(&self) -> impl Iterator<Item = &'static AttributeDef> {
        self.attributes.iter()
    }

    /// Get an attribute definition by storage key.
    pub fn attribute(&self, key: &str) -> Option<&'static AttributeDef> {
        self.attributes.iter().find(|a| a.key == key)
    }

    /// Get an attribute definition by display name.
    pub fn attribute_by_name(&self, name: &str) -> Option<&'static AttributeDef> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Get the definition of `key` as it applies to a node variant.
    pub fn node_attribute(&self, variant: NodeVariant, key: &str) -> Option<&'static AttributeDef> {
        self.attributes
            .iter()
            .find(|a| a.key == key && a.applies_to_node(variant))
    }

    /// Get the definition of `key` as it applies to a relation variant.
    pub fn relation_attribute(
        &self,
        variant: RelationVariant,
        key: &str,
    ) -> Option<&'static AttributeDef> {
        self.attributes
            .iter()
            .find(|a| a.key == key && a.applies_to_relation(variant))
    }

    /// All attributes applicable to a node variant.
    pub fn attributes_for_node(&self, variant: NodeVariant) -> Vec<&'static AttributeDef> {
        self.attributes
            .iter()
            .filter(|a| a.applies_to_node(variant))
            .collect()
    }

    /// All attributes applicable to a relation variant.
    pub fn attributes_for_relation(&self, variant: RelationVariant) -> Vec<&'static AttributeDef> {
        self.attributes
            .iter()
            .filter(|a| a.applies_to_relation(variant))
            .collect()
    }

    /// Required attributes of a node variant.
    pub fn required_node_attributes(&self, variant: NodeVariant) -> Vec<&'static AttributeDef> {
        self.attributes_for_node(variant)
            .into_iter()
            .filter(|a| a.required)
            .collect()
    }
}
