//! The PROV-JSON document model.
//!
//! A [`Document`] is a root [`Scope`]; a bundle is a nested scope of the same
//! shape. Every container sits behind an `Arc`, so cloning a document is cheap
//! and the `*_mut` accessors copy only the level they touch (`Arc::make_mut`).
//! A mutation therefore works on a clone of its input and shares every
//! subtree it did not edit.

use crate::{AttributeSet, CoreResult, NodeVariant, RelationVariant, ScopeField, ScopeId};
use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Prefix name → namespace URI.
pub type PrefixMap = IndexMap<String, String>;

/// Identifier → record, for one node or relation variant.
pub type Container = IndexMap<String, Arc<AttributeSet>>;

/// Bundle identifier → nested scope.
pub type Bundles = IndexMap<String, Arc<Scope>>;

/// One scope of a document: the root or a bundle.
///
/// Absent containers and empty containers are distinct: a container that was
/// present on load (or emptied by a mutation) is written back as `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    prefix: Option<Arc<PrefixMap>>,
    nodes: IndexMap<NodeVariant, Arc<Container>>,
    relations: IndexMap<RelationVariant, Arc<Container>>,
    bundle: Option<Arc<Bundles>>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Read access ====================

    /// The scope's prefix map, if declared.
    pub fn prefixes(&self) -> Option<&Arc<PrefixMap>> {
        self.prefix.as_ref()
    }

    /// Look up a prefix declared directly in this scope.
    pub fn prefix_value(&self, prefix: &str) -> Option<&str> {
        self.prefix
            .as_ref()
            .and_then(|map| map.get(prefix))
            .map(String::as_str)
    }

    /// The container for a node variant, if present.
    pub fn nodes(&self, variant: NodeVariant) -> Option<&Arc<Container>> {
        self.nodes.get(&variant)
    }

    /// The container for a relation variant, if present.
    pub fn relations(&self, variant: RelationVariant) -> Option<&Arc<Container>> {
        self.relations.get(&variant)
    }

    /// The nested bundles, if any were declared.
    pub fn bundles(&self) -> Option<&Arc<Bundles>> {
        self.bundle.as_ref()
    }

    /// Get a node record by variant and identifier.
    pub fn node(&self, variant: NodeVariant, id: &str) -> Option<&Arc<AttributeSet>> {
        self.nodes(variant).and_then(|c| c.get(id))
    }

    /// Check if this scope holds a node of the given variant.
    pub fn has_node(&self, variant: NodeVariant, id: &str) -> bool {
        self.node(variant, id).is_some()
    }

    /// Get a relation record by variant and identifier.
    pub fn relation(&self, variant: RelationVariant, id: &str) -> Option<&Arc<AttributeSet>> {
        self.relations(variant).and_then(|c| c.get(id))
    }

    /// Get a directly nested bundle.
    pub fn bundle(&self, id: &str) -> Option<&Arc<Scope>> {
        self.bundle.as_ref().and_then(|b| b.get(id))
    }

    /// Iterate over present node containers.
    pub fn node_containers(&self) -> impl Iterator<Item = (NodeVariant, &Arc<Container>)> {
        self.nodes.iter().map(|(v, c)| (*v, c))
    }

    /// Iterate over present relation containers.
    pub fn relation_containers(&self) -> impl Iterator<Item = (RelationVariant, &Arc<Container>)> {
        self.relations.iter().map(|(v, c)| (*v, c))
    }

    // ==================== Copy-on-write access ====================

    /// Mutable prefix map, created if absent.
    pub fn prefixes_mut(&mut self) -> &mut PrefixMap {
        Arc::make_mut(self.prefix.get_or_insert_with(Default::default))
    }

    /// Mutable node container, created if absent.
    pub fn nodes_mut(&mut self, variant: NodeVariant) -> &mut Container {
        Arc::make_mut(self.nodes.entry(variant).or_default())
    }

    /// Mutable relation container, created if absent.
    pub fn relations_mut(&mut self, variant: RelationVariant) -> &mut Container {
        Arc::make_mut(self.relations.entry(variant).or_default())
    }

    /// Mutable bundle map, created if absent.
    pub fn bundles_mut(&mut self) -> &mut Bundles {
        Arc::make_mut(self.bundle.get_or_insert_with(Default::default))
    }

    /// Mutable node record, if present.
    pub fn node_mut(&mut self, variant: NodeVariant, id: &str) -> Option<&mut AttributeSet> {
        if !self.has_node(variant, id) {
            return None;
        }
        self.nodes_mut(variant).get_mut(id).map(Arc::make_mut)
    }

    /// Mutable relation record, if present.
    pub fn relation_mut(&mut self, variant: RelationVariant, id: &str) -> Option<&mut AttributeSet> {
        self.relation(variant, id)?;
        self.relations_mut(variant).get_mut(id).map(Arc::make_mut)
    }

    /// Mutable nested bundle, if present.
    pub fn bundle_mut(&mut self, id: &str) -> Option<&mut Scope> {
        self.bundle(id)?;
        self.bundles_mut().get_mut(id).map(Arc::make_mut)
    }

    /// Replace the whole prefix map.
    pub fn set_prefixes(&mut self, prefixes: Option<Arc<PrefixMap>>) {
        self.prefix = prefixes;
    }

    /// Replace a whole node container.
    pub fn set_nodes(&mut self, variant: NodeVariant, container: Arc<Container>) {
        self.nodes.insert(variant, container);
    }

    /// Replace a whole relation container.
    pub fn set_relations(&mut self, variant: RelationVariant, container: Arc<Container>) {
        self.relations.insert(variant, container);
    }

    /// Replace the whole bundle map.
    pub fn set_bundles(&mut self, bundles: Option<Arc<Bundles>>) {
        self.bundle = bundles;
    }
}

/// A borrowed view of one scope together with its location.
#[derive(Debug, Clone, Copy)]
pub struct ScopeRef<'a> {
    /// Bundle id, or `None` for the root.
    pub bundle: Option<&'a str>,
    /// The scope itself.
    pub scope: &'a Scope,
}

impl<'a> ScopeRef<'a> {
    /// The owned scope identifier.
    pub fn id(&self) -> ScopeId {
        ScopeId::from_bundle(self.bundle)
    }
}

/// A PROV-JSON document: the root scope plus its bundles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Scope,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing root scope.
    pub fn from_root(root: Scope) -> Self {
        Self { root }
    }

    /// Decode a document from a JSON value.
    pub fn from_value(value: serde_json::Value) -> CoreResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a document from JSON text.
    pub fn from_json_str(source: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Encode the document as a JSON value.
    pub fn to_value(&self) -> CoreResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Encode the document as indented JSON text.
    pub fn to_json_string_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The root (global) scope.
    pub fn root(&self) -> &Scope {
        &self.root
    }

    /// Mutable root scope.
    pub fn root_mut(&mut self) -> &mut Scope {
        &mut self.root
    }

    /// A bundle directly under the root.
    pub fn bundle(&self, id: &str) -> Option<&Scope> {
        self.root.bundle(id).map(Arc::as_ref)
    }

    /// Resolve a scope identifier.
    pub fn scope(&self, id: &ScopeId) -> Option<&Scope> {
        match id {
            ScopeId::Root => Some(&self.root),
            ScopeId::Bundle(bundle) => self.bundle(bundle),
        }
    }

    /// Resolve a scope identifier for copy-on-write editing.
    pub fn scope_mut(&mut self, id: &ScopeId) -> Option<&mut Scope> {
        match id {
            ScopeId::Root => Some(&mut self.root),
            ScopeId::Bundle(bundle) => self.root.bundle_mut(bundle),
        }
    }

    /// Walk the root scope, then each bundle in declaration order.
    ///
    /// Only bundles directly under the root are visited; a bundle nested in
    /// a bundle is data carried along, not a scope.
    pub fn scopes(&self) -> impl Iterator<Item = ScopeRef<'_>> {
        let bundles = self
            .root
            .bundles()
            .into_iter()
            .flat_map(|b| b.iter())
            .map(|(id, scope)| ScopeRef {
                bundle: Some(id.as_str()),
                scope: scope.as_ref(),
            });
        std::iter::once(ScopeRef {
            bundle: None,
            scope: &self.root,
        })
        .chain(bundles)
    }

    /// Return the first `Some` produced by `f` in scope-walk order.
    ///
    /// This is the single tie-break every "search everywhere" query uses:
    /// the root wins, then bundles in declaration order.
    pub fn find_in_scopes<'a, T>(&'a self, mut f: impl FnMut(ScopeRef<'a>) -> Option<T>) -> Option<T> {
        self.scopes().find_map(|scope| f(scope))
    }

    /// Identifiers of the scopes, in walk order, where `f` holds.
    pub fn scopes_where(&self, mut f: impl FnMut(&Scope) -> bool) -> Vec<ScopeId> {
        self.scopes()
            .filter(|s| f(s.scope))
            .map(|s| s.id())
            .collect()
    }
}

// ==================== Wire format ====================

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.prefix.is_some() as usize
            + self.nodes.len()
            + self.relations.len()
            + self.bundle.is_some() as usize;
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(prefix) = &self.prefix {
            map.serialize_entry(ScopeField::PREFIX_KEY, prefix)?;
        }
        for (variant, container) in &self.nodes {
            map.serialize_entry(variant.key(), container)?;
        }
        for (variant, container) in &self.relations {
            map.serialize_entry(variant.key(), container)?;
        }
        if let Some(bundles) = &self.bundle {
            map.serialize_entry(ScopeField::BUNDLE_KEY, bundles)?;
        }
        map.end()
    }
}

struct ScopeVisitor;

impl<'de> Visitor<'de> for ScopeVisitor {
    type Value = Scope;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a PROV-JSON document or bundle object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Scope, A::Error> {
        let mut scope = Scope::default();
        while let Some(key) = access.next_key::<String>()? {
            match ScopeField::parse(&key) {
                Some(ScopeField::Prefix) => {
                    scope.prefix = Some(access.next_value()?);
                }
                Some(ScopeField::Node(variant)) => {
                    scope.nodes.insert(variant, access.next_value()?);
                }
                Some(ScopeField::Relation(variant)) => {
                    scope.relations.insert(variant, access.next_value()?);
                }
                Some(ScopeField::Bundle) => {
                    scope.bundle = Some(access.next_value()?);
                }
                None => return Err(de::Error::custom(format!("unknown PROV-JSON key `{}`", key))),
            }
        }
        Ok(scope)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ScopeVisitor)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Scope::deserialize(deserializer).map(Document::from_root)
    }
}
