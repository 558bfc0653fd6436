//! Mutation executor - coordinates mutation operations.
//!
//! The executor delegates to specialized operation modules in `ops/`:
//! - `ops/node.rs` - node creation, deletion with cascade, moves
//! - `ops/rename.rs` - identifier and prefix renames
//! - `ops/namespace.rs` - prefix map edits
//! - `ops/attribute.rs` - node attribute edits
//! - `ops/relation.rs` - relation creation, deletion and attributes
//! - `ops/bundle.rs` - bundle creation and deletion

use prov_core::{AttributeValue, Document, NodeVariant, RelationVariant, ScopeId, ValueKind};
use prov_registry::Registry;

use crate::error::MutationResult;
use crate::{ops, MutationConfig};

/// Mutation executor.
///
/// Holds the definition registry and options; documents are passed per call
/// and never modified.
#[derive(Debug, Clone)]
pub struct MutationExecutor<'r> {
    registry: &'r Registry,
    config: MutationConfig,
}

impl Default for MutationExecutor<'static> {
    fn default() -> Self {
        Self::new(Registry::prov())
    }
}

impl<'r> MutationExecutor<'r> {
    /// Create a new executor with default options.
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: MutationConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MutationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MutationConfig {
        &self.config
    }

    // ==================== Nodes ====================

    pub fn create_node(
        &self,
        document: &Document,
        variant: NodeVariant,
        prefix: &str,
        name: &str,
    ) -> Document {
        ops::create_node(&self.config, document, variant, prefix, name)
    }

    pub fn create_node_in(
        &self,
        document: &Document,
        scope: &ScopeId,
        variant: NodeVariant,
        prefix: &str,
        name: &str,
    ) -> MutationResult<Document> {
        ops::create_node_in(&self.config, document, scope, variant, prefix, name)
    }

    pub fn delete_node(
        &self,
        document: &Document,
        variant: NodeVariant,
        id: &str,
    ) -> MutationResult<Document> {
        ops::delete_node(document, variant, id)
    }

    pub fn move_node(
        &self,
        document: &Document,
        from: &ScopeId,
        to: &ScopeId,
        variant: NodeVariant,
        id: &str,
    ) -> MutationResult<Document> {
        ops::move_node(document, from, to, variant, id)
    }

    // ==================== Renames ====================

    pub fn rename_identifier(
        &self,
        document: &Document,
        prev: &str,
        new: &str,
    ) -> MutationResult<Document> {
        ops::rename_identifier(document, prev, new)
    }

    pub fn rename_prefix(&self, document: &Document, prev: &str, new: &str) -> MutationResult<Document> {
        ops::rename_prefix(document, prev, new)
    }

    // ==================== Namespaces ====================

    pub fn create_namespace(
        &self,
        document: &Document,
        prefix: &str,
        value: &str,
        bundle: Option<&str>,
    ) -> MutationResult<Document> {
        ops::create_namespace(document, prefix, value, bundle)
    }

    pub fn update_namespace(
        &self,
        document: &Document,
        prefix: &str,
        value: &str,
        bundle: Option<&str>,
    ) -> MutationResult<Document> {
        ops::update_namespace(document, prefix, value, bundle)
    }

    pub fn delete_namespace(&self, document: &Document, prefix: &str, bundle: Option<&str>) -> Document {
        ops::delete_namespace(document, prefix, bundle)
    }

    // ==================== Node attributes ====================

    pub fn create_attribute(
        &self,
        document: &Document,
        variant: NodeVariant,
        id: &str,
        key: &str,
        value: impl Into<AttributeValue>,
    ) -> MutationResult<Document> {
        ops::create_attribute(self.registry, &self.config, document, variant, id, key, value.into())
    }

    pub fn set_attribute(
        &self,
        document: &Document,
        variant: NodeVariant,
        id: &str,
        key: &str,
        value: impl Into<AttributeValue>,
    ) -> MutationResult<Document> {
        ops::set_attribute(self.registry, &self.config, document, variant, id, key, value.into())
    }

    pub fn delete_attribute(
        &self,
        document: &Document,
        variant: NodeVariant,
        id: &str,
        key: &str,
    ) -> MutationResult<Document> {
        ops::delete_attribute(document, variant, id, key)
    }

    pub fn rename_attribute(
        &self,
        document: &Document,
        variant: NodeVariant,
        id: &str,
        prev_key: &str,
        new_key: &str,
    ) -> MutationResult<Document> {
        ops::rename_attribute(self.registry, &self.config, document, variant, id, prev_key, new_key)
    }

    pub fn retype_attribute(
        &self,
        document: &Document,
        variant: NodeVariant,
        id: &str,
        key: &str,
        kind: &ValueKind,
    ) -> MutationResult<Document> {
        ops::retype_attribute(self.registry, &self.config, document, variant, id, key, kind)
    }

    // ==================== Relations ====================

    pub fn create_relation(
        &self,
        document: &Document,
        variant: RelationVariant,
        relation_id: &str,
        domain_id: &str,
        range_id: &str,
    ) -> Document {
        ops::create_relation(self.registry, document, variant, relation_id, domain_id, range_id)
    }

    pub fn create_relation_in(
        &self,
        document: &Document,
        scope: &ScopeId,
        variant: RelationVariant,
        relation_id: &str,
        domain_id: &str,
        range_id: &str,
    ) -> MutationResult<Document> {
        ops::create_relation_in(
            self.registry,
            document,
            scope,
            variant,
            relation_id,
            domain_id,
            range_id,
        )
    }

    pub fn delete_relation(
        &self,
        document: &Document,
        variant: RelationVariant,
        relation_id: &str,
    ) -> MutationResult<Document> {
        ops::delete_relation(document, variant, relation_id)
    }

    pub fn set_relation_attribute(
        &self,
        document: &Document,
        variant: RelationVariant,
        relation_id: &str,
        key: &str,
        value: impl Into<AttributeValue>,
    ) -> MutationResult<Document> {
        ops::set_relation_attribute(
            self.registry,
            &self.config,
            document,
            variant,
            relation_id,
            key,
            value.into(),
        )
    }

    pub fn delete_relation_attribute(
        &self,
        document: &Document,
        variant: RelationVariant,
        relation_id: &str,
        key: &str,
    ) -> MutationResult<Document> {
        ops::delete_relation_attribute(document, variant, relation_id, key)
    }

    // ==================== Bundles ====================

    pub fn create_bundle(&self, document: &Document, bundle_id: &str) -> MutationResult<Document> {
        ops::create_bundle(document, bundle_id)
    }

    pub fn delete_bundle(&self, document: &Document, bundle_id: &str) -> MutationResult<Document> {
        ops::delete_bundle(document, bundle_id)
    }
}
