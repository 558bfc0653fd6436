//! Document-wide renames of identifiers and prefixes.
//!
//! Both renames share one rewriting pass over the root and its bundles, the
//! same scopes every query walks. A bundle nested inside a bundle is carried
//! over untouched. A container, record or bundle is only rebuilt when
//! something in it changed; everything else keeps its `Arc`.

use std::sync::Arc;

use indexmap::IndexMap;
use prov_core::{
    replace_prefix, AttributeSet, Bundles, Container, Document, LookupKind, PrefixMap, Scope,
};
use tracing::debug;

use crate::error::{MutationError, MutationResult};

/// Rename an identifier everywhere it occurs.
///
/// Container keys (nodes, relations, bundles) and string values equal to
/// `prev` become `new`; typed-literal payloads are included, datatype tags
/// and prefix maps are left alone.
pub fn rename_identifier(document: &Document, prev: &str, new: &str) -> MutationResult<Document> {
    if prev == new {
        return Ok(document.clone());
    }
    let rewriter = Rewriter {
        rename: |s: &str| (s == prev).then(|| new.to_string()),
        attribute_keys: false,
        datatypes: false,
        operation: "rename_identifier",
    };
    let next = rewriter.document(document)?;
    debug!(operation = "rename_identifier", prev, new);
    Ok(next)
}

/// Rename a prefix and every identifier qualified with it.
///
/// Each prefix map declaring `prev` keeps the entry's position and value
/// under the new name. Keys, attribute keys, string values and datatype
/// tags of the form `prev:local` become `new:local`. Bare local names are
/// not rewritten, even when `prev` is `default`.
///
/// Fails with `AlreadyExists` if any scope already declares `new`, since
/// renamed identifiers in that scope would silently change namespace.
pub fn rename_prefix(document: &Document, prev: &str, new: &str) -> MutationResult<Document> {
    if !document.scopes().any(|s| s.scope.prefix_value(prev).is_some()) {
        return Err(MutationError::prefix_not_found(prev, "rename_prefix"));
    }
    if prev == new {
        return Ok(document.clone());
    }
    if document.scopes().any(|s| s.scope.prefix_value(new).is_some()) {
        return Err(MutationError::already_exists(LookupKind::Prefix, new, "rename_prefix"));
    }
    let rewriter = Rewriter {
        rename: |s: &str| replace_prefix(s, prev, new),
        attribute_keys: true,
        datatypes: true,
        operation: "rename_prefix",
    };
    let mut next = rewriter.document(document)?;
    rename_prefix_entries(&mut next, prev, new);
    debug!(operation = "rename_prefix", prev, new);
    Ok(next)
}

/// Move the `prev` entry of every declaring prefix map to `new`.
fn rename_prefix_entries(document: &mut Document, prev: &str, new: &str) {
    let declaring = document.scopes_where(|scope| scope.prefix_value(prev).is_some());
    for id in declaring {
        if let Some(scope) = document.scope_mut(&id) {
            let renamed: PrefixMap = scope
                .prefixes()
                .into_iter()
                .flat_map(|map| map.iter())
                .map(|(name, uri)| {
                    let name = if name == prev { new.to_string() } else { name.clone() };
                    (name, uri.clone())
                })
                .collect();
            scope.set_prefixes(Some(Arc::new(renamed)));
        }
    }
}

/// One rewriting pass. `rename` returns the replacement for a string, or
/// `None` to keep it.
struct Rewriter<F> {
    rename: F,
    attribute_keys: bool,
    datatypes: bool,
    operation: &'static str,
}

impl<F: Fn(&str) -> Option<String>> Rewriter<F> {
    fn document(&self, document: &Document) -> MutationResult<Document> {
        let root = document.root();
        let mut out = self.scope(root)?;
        if let Some(bundles) = root.bundles() {
            if let Some(rewritten) = self.bundles(bundles)? {
                out.get_or_insert_with(|| root.clone())
                    .set_bundles(Some(Arc::new(rewritten)));
            }
        }
        Ok(match out {
            Some(root) => Document::from_root(root),
            None => document.clone(),
        })
    }

    /// Rewrite the containers of one scope, leaving its bundles alone.
    fn scope(&self, scope: &Scope) -> MutationResult<Option<Scope>> {
        let mut out: Option<Scope> = None;

        for (variant, container) in scope.node_containers() {
            if let Some(rewritten) = self.container(container, LookupKind::Node)? {
                out.get_or_insert_with(|| scope.clone())
                    .set_nodes(variant, Arc::new(rewritten));
            }
        }
        for (variant, container) in scope.relation_containers() {
            if let Some(rewritten) = self.container(container, LookupKind::Relation)? {
                out.get_or_insert_with(|| scope.clone())
                    .set_relations(variant, Arc::new(rewritten));
            }
        }
        Ok(out)
    }

    fn bundles(&self, bundles: &Bundles) -> MutationResult<Option<Bundles>> {
        let mut changed = false;
        let mut entries = Vec::with_capacity(bundles.len());
        for (id, child) in bundles.iter() {
            let new_id = (self.rename)(id);
            let new_child = self.scope(child)?;
            changed |= new_id.is_some() || new_child.is_some();
            entries.push((
                new_id.unwrap_or_else(|| id.clone()),
                new_child.map(Arc::new).unwrap_or_else(|| child.clone()),
            ));
        }
        if !changed {
            return Ok(None);
        }
        self.collect_unique(entries, LookupKind::Bundle).map(Some)
    }

    fn container(&self, container: &Container, kind: LookupKind) -> MutationResult<Option<Container>> {
        let mut changed = false;
        let mut entries = Vec::with_capacity(container.len());
        for (id, record) in container.iter() {
            let new_id = (self.rename)(id);
            let new_record = self.record(record)?;
            changed |= new_id.is_some() || new_record.is_some();
            entries.push((
                new_id.unwrap_or_else(|| id.clone()),
                new_record.map(Arc::new).unwrap_or_else(|| record.clone()),
            ));
        }
        if !changed {
            return Ok(None);
        }
        self.collect_unique(entries, kind).map(Some)
    }

    fn record(&self, record: &AttributeSet) -> MutationResult<Option<AttributeSet>> {
        let mut changed = false;
        let mut entries = Vec::with_capacity(record.len());
        for (key, value) in record.iter() {
            let new_key = if self.attribute_keys { (self.rename)(key) } else { None };
            let new_value = value.rewrite_strings(self.datatypes, &self.rename);
            changed |= new_key.is_some() || new_value.is_some();
            entries.push((
                new_key.unwrap_or_else(|| key.clone()),
                new_value.unwrap_or_else(|| value.clone()),
            ));
        }
        if !changed {
            return Ok(None);
        }
        self.collect_unique(entries, LookupKind::Attribute).map(Some)
    }

    /// Rebuild a map, refusing renames that would merge two entries.
    fn collect_unique<V>(
        &self,
        entries: Vec<(String, V)>,
        kind: LookupKind,
    ) -> MutationResult<IndexMap<String, V>> {
        let mut map = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            if map.contains_key(&key) {
                return Err(MutationError::already_exists(kind, key, self.operation));
            }
            map.insert(key, value);
        }
        Ok(map)
    }
}
