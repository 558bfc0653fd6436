//! Shared seed documents.

use serde_json::{json, Value};

/// One agent, one entity, and an attribution between them.
pub fn attribution() -> Value {
    json!({
        "prefix": {"ex": "http://example.com/"},
        "agent": {"ex:Alice": {}},
        "entity": {"ex:Report": {}},
        "wasAttributedTo": {
            "_:id1": {"prov:agent": "ex:Alice", "prov:entity": "ex:Report"}
        }
    })
}

/// Root and bundle both declare `ex`, with different namespaces.
pub fn shadowed_prefix() -> Value {
    json!({
        "prefix": {"ex": "http://example.com/"},
        "bundle": {
            "B": {
                "prefix": {"ex": "http://other.com/"},
                "entity": {"ex:Draft": {}}
            }
        }
    })
}

/// A usage whose entity endpoint does not exist.
pub fn dangling_usage() -> Value {
    json!({
        "prefix": {"prefix1": "http://one.example/"},
        "activity": {"prefix1:Activity": {}},
        "used": {
            "_:id1": {"prov:activity": "prefix1:Activity", "prov:entity": "prefix1:MissingEntity"}
        }
    })
}

/// A small provenance trail spread over the root and two bundles.
///
/// `prefix1:Agent` is referenced from relations in every scope, from a
/// node attribute value and from a typed literal.
pub fn lab_notebook() -> Value {
    json!({
        "prefix": {
            "prefix1": "http://lab.example/",
            "ex": "http://example.com/"
        },
        "agent": {
            "prefix1:Agent": {"prov:label": "Lab robot", "provviz:color": "#336699"},
            "ex:Supervisor": {}
        },
        "activity": {
            "ex:Measure": {"prov:startTime": "2024-03-01T09:00:00Z"}
        },
        "entity": {
            "ex:Sample": {"ex:operator": "prefix1:Agent"},
            "ex:Protocol": {}
        },
        "wasAssociatedWith": {
            "_:id1": {"prov:activity": "ex:Measure", "prov:agent": "prefix1:Agent", "prov:plan": "ex:Protocol"}
        },
        "actedOnBehalfOf": {
            "_:id2": {"prov:delegate": "prefix1:Agent", "prov:responsible": "ex:Supervisor"}
        },
        "bundle": {
            "ex:Run1": {
                "entity": {"ex:Result": {"ex:by": {"$": "prefix1:Agent", "type": "xsd:QName"}}},
                "wasAttributedTo": {
                    "_:id3": {"prov:entity": "ex:Result", "prov:agent": "prefix1:Agent"}
                }
            },
            "ex:Run2": {
                "prefix": {"run": "http://lab.example/runs/2/"},
                "entity": {"run:Result": {}},
                "wasGeneratedBy": {
                    "_:id4": {"prov:entity": "run:Result", "prov:activity": "ex:Measure"}
                }
            }
        }
    })
}
