//! Unique identifier generation.
//!
//! Generators probe candidate names with an increasing numeric suffix until
//! one is unused. Probing is local to the call; nothing is remembered.

use prov_core::{qualify, Document, NodeVariant, BLANK_PREFIX};

use crate::{has_bundle, has_node, has_relation};

/// Generate an unused node identifier, e.g. `ex:Agent`, `ex:Agent1`.
///
/// A candidate collides with a node of any variant in any scope.
pub fn generate_node_identifier(document: &Document, prefix: &str, variant: NodeVariant) -> String {
    probe(|index| suffixed(prefix, variant.capitalized(), index), |id| {
        has_node(document, id)
    })
}

/// Generate an unused bundle identifier, e.g. `ex:Bundle`, `ex:Bundle1`.
pub fn generate_bundle_identifier(document: &Document, prefix: &str) -> String {
    probe(|index| suffixed(prefix, "Bundle", index), |id| {
        has_bundle(document, id)
    })
}

/// Generate an unused blank relation identifier, starting at `_:id1`.
pub fn generate_relation_identifier(document: &Document) -> String {
    probe(
        |index| qualify(BLANK_PREFIX, &format!("id{}", index + 1)),
        |id| has_relation(document, id, None),
    )
}

fn suffixed(prefix: &str, stem: &str, index: usize) -> String {
    if index == 0 {
        qualify(prefix, stem)
    } else {
        qualify(prefix, &format!("{}{}", stem, index))
    }
}

/// Return the first candidate not `taken`.
///
/// Terminates after at most one probe per existing identifier, plus one.
fn probe(candidate: impl Fn(usize) -> String, taken: impl Fn(&str) -> bool) -> String {
    let mut index = 0;
    loop {
        let id = candidate(index);
        if !taken(&id) {
            return id;
        }
        index += 1;
    }
}
