//! Identifier parsing.
//!
//! PROV-JSON identifiers are either bare local names, implicitly under the
//! `default` prefix, or qualified as `prefix:localName`. Only the first colon
//! separates the two parts; the local name may contain further colons.

use std::fmt;

/// The prefix an unqualified identifier belongs to.
pub const DEFAULT_PREFIX: &str = "default";

/// The prefix PROV-JSON uses for blank (anonymous) relation identifiers.
pub const BLANK_PREFIX: &str = "_";

/// Returns the prefix component of an identifier, or `"default"` if unqualified.
pub fn parse_prefix(identifier: &str) -> &str {
    match identifier.split_once(':') {
        Some((prefix, _)) => prefix,
        None => DEFAULT_PREFIX,
    }
}

/// Returns the local-name component of an identifier.
pub fn parse_local_name(identifier: &str) -> &str {
    match identifier.split_once(':') {
        Some((_, local)) => local,
        None => identifier,
    }
}

/// Returns true if the identifier carries an explicit prefix.
pub fn is_qualified(identifier: &str) -> bool {
    identifier.contains(':')
}

/// Build an identifier from a prefix and a local name.
///
/// The `default` prefix yields an unqualified identifier.
pub fn qualify(prefix: &str, local_name: &str) -> String {
    if prefix == DEFAULT_PREFIX {
        local_name.to_string()
    } else {
        format!("{}:{}", prefix, local_name)
    }
}

/// Replace the prefix of `identifier` if it is explicitly qualified with `from`.
///
/// Returns `None` when the identifier does not carry the `from:` segment.
pub fn replace_prefix(identifier: &str, from: &str, to: &str) -> Option<String> {
    let local = identifier.strip_prefix(from)?.strip_prefix(':')?;
    Some(qualify(to, local))
}

/// Identifies one scope of a document: the root, or a bundle directly under it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeId {
    Root,
    Bundle(String),
}

impl ScopeId {
    /// Scope for an optional bundle id: `None` is the root.
    pub fn from_bundle(bundle: Option<&str>) -> Self {
        match bundle {
            Some(id) => ScopeId::Bundle(id.to_string()),
            None => ScopeId::Root,
        }
    }

    /// The bundle id, or `None` for the root.
    pub fn bundle(&self) -> Option<&str> {
        match self {
            ScopeId::Root => None,
            ScopeId::Bundle(id) => Some(id),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, ScopeId::Root)
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeId::Root => f.write_str("root"),
            ScopeId::Bundle(id) => write!(f, "bundle {}", id),
        }
    }
}
