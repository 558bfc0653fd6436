//! Namespace resolution.
//!
//! Prefixes resolve bundle-local first, then against the root prefix map.
//! An unresolved prefix is not an error here; it is reported by validation.

use crate::{parse_local_name, parse_prefix, CoreError, CoreResult, Document, DEFAULT_PREFIX};

/// Resolve a prefix name to its namespace URI.
///
/// With a bundle scope, the bundle's own prefix map is consulted first.
/// A bundle id that does not exist falls through to the root map.
pub fn resolve_prefix_value<'d>(
    document: &'d Document,
    prefix: &str,
    bundle: Option<&str>,
) -> Option<&'d str> {
    bundle
        .and_then(|id| document.bundle(id))
        .and_then(|scope| scope.prefix_value(prefix))
        .or_else(|| document.root().prefix_value(prefix))
}

/// Resolve the namespace URI of an identifier's prefix component.
pub fn resolve_identifier_namespace<'d>(
    document: &'d Document,
    identifier: &str,
    bundle: Option<&str>,
) -> Option<&'d str> {
    resolve_prefix_value(document, parse_prefix(identifier), bundle)
}

/// Expand an identifier to its full IRI.
///
/// Falls back to the raw identifier if the prefix is unresolved.
pub fn expand_identifier(document: &Document, identifier: &str, bundle: Option<&str>) -> String {
    match resolve_identifier_namespace(document, identifier, bundle) {
        Some(uri) => format!("{}{}", uri, parse_local_name(identifier)),
        None => identifier.to_string(),
    }
}

/// Prefix names visible from a scope.
///
/// Root prefixes first, then the bundle's local prefixes. Duplicates are kept.
pub fn list_namespaces<'d>(document: &'d Document, bundle: Option<&str>) -> Vec<&'d str> {
    let root = document.root().prefixes().into_iter().flat_map(|m| m.keys());
    let local = bundle
        .and_then(|id| document.bundle(id))
        .and_then(|scope| scope.prefixes())
        .into_iter()
        .flat_map(|m| m.keys());
    root.chain(local).map(String::as_str).collect()
}

/// The prefix new identifiers should default to.
///
/// `default` if declared, otherwise the first root prefix.
pub fn default_prefix(document: &Document) -> CoreResult<&str> {
    let prefixes = document.root().prefixes().ok_or(CoreError::NoNamespace)?;
    if let Some((name, _)) = prefixes.get_key_value(DEFAULT_PREFIX) {
        return Ok(name.as_str());
    }
    prefixes
        .keys()
        .next()
        .map(String::as_str)
        .ok_or(CoreError::NoNamespace)
}
