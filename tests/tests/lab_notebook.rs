//! Multi-scope editing sessions over the lab notebook document.

use std::sync::Arc;

use prov_core::{expand_identifier, list_namespaces, resolve_prefix_value};
use prov_query::{
    generate_bundle_identifier, generate_node_identifier, get_full_name, get_node_variant,
    get_outgoing_relations, has_bundle, has_node_of, locate_node,
};
use pretty_assertions::assert_eq;
use prov_tests::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn notebook() -> Document {
    Document::from_value(fixtures::lab_notebook()).unwrap()
}

#[test]
fn test_fixture_is_valid() {
    assert!(validate_document(&notebook()).unwrap().is_empty());
}

mod renames {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("notebook_renames")
            .seed(fixtures::lab_notebook())
            .step(
                "rename_agent",
                |ex, doc| ex.rename_identifier(doc, "prefix1:Agent", "prefix1:Bot"),
                |a| {
                    a.nowhere("prefix1:Agent")
                        .has_node(NodeVariant::Agent, "prefix1:Bot")
                        .at("/wasAssociatedWith/_:id1/prov:agent", json!("prefix1:Bot"))
                        .at("/actedOnBehalfOf/_:id2/prov:delegate", json!("prefix1:Bot"))
                        .at("/entity/ex:Sample/ex:operator", json!("prefix1:Bot"))
                        .at(
                            "/bundle/ex:Run1/wasAttributedTo/_:id3/prov:agent",
                            json!("prefix1:Bot"),
                        )
                        .at(
                            "/bundle/ex:Run1/entity/ex:Result/ex:by",
                            json!({"$": "prefix1:Bot", "type": "xsd:QName"}),
                        )
                        .diagnostics(0)
                },
            )
            .step(
                "rename_onto_existing",
                |ex, doc| ex.rename_identifier(doc, "prefix1:Bot", "ex:Supervisor"),
                |a| a.error("already exists: ex:Supervisor"),
            )
            .step(
                "rename_prefix",
                |ex, doc| ex.rename_prefix(doc, "ex", "lab"),
                |a| {
                    a.nowhere("ex:Sample")
                        .nowhere("ex:Run1")
                        .at("/prefix/lab", json!("http://example.com/"))
                        .at("/entity/lab:Sample/lab:operator", json!("prefix1:Bot"))
                        .at(
                            "/bundle/lab:Run2/wasGeneratedBy/_:id4/prov:activity",
                            json!("lab:Measure"),
                        )
                        .at("/bundle/lab:Run2/prefix/run", json!("http://lab.example/runs/2/"))
                        .check(|doc| doc.root().prefix_value("ex").is_none())
                        .diagnostics(0)
                },
            )
            .step(
                "rename_prefix_onto_declared",
                |ex, doc| ex.rename_prefix(doc, "lab", "prefix1"),
                |a| a.error("already exists: prefix1"),
            )
            .step(
                "rename_undeclared_prefix",
                |ex, doc| ex.rename_prefix(doc, "zz", "yy"),
                |a| a.error("Prefix not found: zz"),
            )
    }

    #[test]
    fn test_renames_reach_every_scope() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod deletions {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("notebook_deletions")
            .seed(fixtures::lab_notebook())
            .step(
                "delete_agent",
                |ex, doc| ex.delete_node(doc, NodeVariant::Agent, "prefix1:Agent"),
                |a| {
                    a.lacks_node(NodeVariant::Agent, "prefix1:Agent")
                        .at("/wasAssociatedWith", json!({}))
                        .at("/actedOnBehalfOf", json!({}))
                        .at("/bundle/ex:Run1/wasAttributedTo", json!({}))
                        .at("/bundle/ex:Run2/wasGeneratedBy/_:id4/prov:activity", json!("ex:Measure"))
                        .diagnostics(0)
                },
            )
            .step(
                "delete_protocol_leaves_plan_dangling",
                |ex, doc| {
                    let doc = ex.create_node(doc, NodeVariant::Agent, "prefix1", "Agent");
                    let doc = ex.create_relation(
                        &doc,
                        RelationVariant::Association,
                        "_:id5",
                        "ex:Measure",
                        "prefix1:Agent",
                    );
                    let doc = ex.set_relation_attribute(
                        &doc,
                        RelationVariant::Association,
                        "_:id5",
                        "prov:plan",
                        "ex:Protocol",
                    )?;
                    ex.delete_node(&doc, NodeVariant::Entity, "ex:Protocol")
                },
                |a| a.diagnostics(1),
            )
            .step(
                "delete_bundle",
                |ex, doc| ex.delete_bundle(doc, "ex:Run2"),
                |a| {
                    a.lacks_node(NodeVariant::Entity, "run:Result")
                        .check(|doc| !has_bundle(doc, "ex:Run2") && has_bundle(doc, "ex:Run1"))
                },
            )
            .step(
                "delete_missing_bundle",
                |ex, doc| ex.delete_bundle(doc, "ex:Run2"),
                |a| a.error("Bundle not found: ex:Run2"),
            )
    }

    #[test]
    fn test_deletions_cascade_through_relations() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod moves {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("notebook_moves")
            .seed(fixtures::lab_notebook())
            .step(
                "move_sample_into_run1",
                |ex, doc| {
                    ex.move_node(
                        doc,
                        &ScopeId::Root,
                        &ScopeId::Bundle("ex:Run1".into()),
                        NodeVariant::Entity,
                        "ex:Sample",
                    )
                },
                |a| {
                    a.at("/bundle/ex:Run1/entity/ex:Sample/ex:operator", json!("prefix1:Agent"))
                        .check(|doc| {
                            locate_node(doc, NodeVariant::Entity, "ex:Sample")
                                == Some(ScopeId::Bundle("ex:Run1".into()))
                        })
                },
            )
            .step(
                "move_into_missing_bundle",
                |ex, doc| {
                    ex.move_node(
                        doc,
                        &ScopeId::Bundle("ex:Run1".into()),
                        &ScopeId::Bundle("ex:Nope".into()),
                        NodeVariant::Entity,
                        "ex:Sample",
                    )
                },
                |a| a.error_matching(r"^Bundle not found: ex:Nope \(during move_node\)$"),
            )
            .step(
                "move_result_onto_duplicate",
                |ex, doc| {
                    let doc = ex.create_node(doc, NodeVariant::Entity, "ex", "Result");
                    ex.move_node(
                        &doc,
                        &ScopeId::Bundle("ex:Run1".into()),
                        &ScopeId::Root,
                        NodeVariant::Entity,
                        "ex:Result",
                    )
                },
                |a| a.error("already exists: ex:Result"),
            )
    }

    #[test]
    fn test_nodes_move_between_scopes() {
        scenario().run().unwrap();
    }
}

mod namespaces {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("notebook_namespaces")
            .seed(fixtures::lab_notebook())
            .step(
                "declare_in_bundle",
                |ex, doc| ex.create_namespace(doc, "prefix1", "http://elsewhere/", Some("ex:Run1")),
                |a| a.at("/bundle/ex:Run1/prefix/prefix1", json!("http://elsewhere/")),
            )
            .step(
                "update_root",
                |ex, doc| ex.update_namespace(doc, "ex", "http://example.org/", None),
                |a| a.at("/prefix/ex", json!("http://example.org/")),
            )
            .step(
                "update_undeclared",
                |ex, doc| ex.update_namespace(doc, "run", "http://x/", None),
                |a| a.error("Prefix not found: run"),
            )
            .step(
                "delete_root_ex",
                |ex, doc| Ok(ex.delete_namespace(doc, "ex", None)),
                |a| a.diagnostics(7),
            )
    }

    #[test]
    fn test_namespace_edits() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_resolution_follows_scope() {
        let doc = notebook();
        let doc = MutationExecutor::default()
            .create_namespace(&doc, "prefix1", "http://elsewhere/", Some("ex:Run1"))
            .unwrap();

        assert_eq!(resolve_prefix_value(&doc, "prefix1", Some("ex:Run1")), Some("http://elsewhere/"));
        assert_eq!(resolve_prefix_value(&doc, "prefix1", Some("ex:Run2")), Some("http://lab.example/"));
        assert_eq!(resolve_prefix_value(&doc, "run", None), None);
        assert_eq!(
            expand_identifier(&doc, "run:Result", Some("ex:Run2")),
            "http://lab.example/runs/2/Result"
        );
        assert_eq!(list_namespaces(&doc, Some("ex:Run2")), vec!["prefix1", "ex", "run"]);
        assert_eq!(get_full_name(&doc, "ex:Sample"), "http://example.com/Sample");

        // Resolving does not depend on how often it is asked.
        let once = resolve_prefix_value(&doc, "ex", Some("ex:Run1"));
        let twice = resolve_prefix_value(&doc, "ex", Some("ex:Run1"));
        assert_eq!(once, twice);
    }
}

mod retyping {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("retype_start_time")
            .seed(fixtures::lab_notebook())
            .step(
                "start_time_as_number",
                |ex, doc| ex.retype_attribute(doc, NodeVariant::Activity, "ex:Measure", "prov:startTime", &ValueKind::Number),
                |a| a.error("Invalid value for prov:startTime: expected Number, got String"),
            )
            .step(
                "start_time_as_typed",
                |ex, doc| {
                    ex.retype_attribute(
                        doc,
                        NodeVariant::Activity,
                        "ex:Measure",
                        "prov:startTime",
                        &ValueKind::Typed("xsd:dateTime".into()),
                    )
                },
                |a| {
                    a.at(
                        "/activity/ex:Measure/prov:startTime",
                        json!({"$": "2024-03-01T09:00:00Z", "type": "xsd:dateTime"}),
                    )
                    .diagnostics(0)
                },
            )
            .step(
                "label_as_text",
                |ex, doc| ex.retype_attribute(doc, NodeVariant::Agent, "prefix1:Agent", "prov:label", &ValueKind::String),
                |a| a.at("/agent/prefix1:Agent/prov:label", json!("Lab robot")),
            )
    }

    #[test]
    fn test_retyped_values_stay_in_range() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nested() -> serde_json::Value {
        json!({
            "prefix": {"ex": "http://example.com/"},
            "bundle": {
                "ex:B": {
                    "bundle": {
                        "ex:C": {
                            "agent": {"zz:X": {}},
                            "wasAttributedTo": {"_:a": {"prov:entity": "ex:Missing", "prov:agent": "zz:X"}}
                        }
                    }
                }
            }
        })
    }

    pub fn scenario() -> Scenario {
        Scenario::new("nested_bundle")
            .seed(nested())
            .step(
                "delete_nested_agent",
                |ex, doc| ex.delete_node(doc, NodeVariant::Agent, "zz:X"),
                |a| a.error_matching(r"^Node not found: zz:X \(during delete_node\)$"),
            )
            .step(
                "rename_nested_agent",
                |ex, doc| ex.rename_identifier(doc, "zz:X", "zz:Y"),
                |a| {
                    a.lacks_node(NodeVariant::Agent, "zz:X")
                        .lacks_node(NodeVariant::Agent, "zz:Y")
                        .at("/bundle/ex:B/bundle/ex:C/agent", json!({"zz:X": {}}))
                        .check(|doc| {
                            validate_document(doc)
                                .is_ok_and(|d| !d.is_empty() && d.into_iter().all(|d| d.kind == DiagnosticKind::SchemaViolation))
                        })
                },
            )
    }

    #[test]
    fn test_nested_bundles_are_outside_every_walk() {
        init_tracing();
        scenario().run().unwrap();
    }
}

mod sharing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attribute_edit_shares_untouched_subtrees() {
        // GIVEN
        let before = notebook();

        // WHEN
        let after = MutationExecutor::default()
            .create_attribute(&before, NodeVariant::Agent, "ex:Supervisor", "prov:label", "Dr. Who")
            .unwrap();

        // THEN
        let agents_before = before.root().nodes(NodeVariant::Agent).unwrap();
        let agents_after = after.root().nodes(NodeVariant::Agent).unwrap();
        assert!(!Arc::ptr_eq(agents_before, agents_after));
        assert!(Arc::ptr_eq(
            agents_before.get("prefix1:Agent").unwrap(),
            agents_after.get("prefix1:Agent").unwrap()
        ));
        assert!(Arc::ptr_eq(
            before.root().nodes(NodeVariant::Activity).unwrap(),
            after.root().nodes(NodeVariant::Activity).unwrap()
        ));
        assert!(Arc::ptr_eq(before.root().bundles().unwrap(), after.root().bundles().unwrap()));
        assert!(Arc::ptr_eq(
            before.root().relations(RelationVariant::Association).unwrap(),
            after.root().relations(RelationVariant::Association).unwrap()
        ));
        assert_eq!(before, notebook());
    }

    #[test]
    fn test_bundle_rename_shares_sibling_bundle() {
        let before = notebook();
        let after = MutationExecutor::default()
            .rename_identifier(&before, "ex:Result", "ex:Outcome")
            .unwrap();

        let run2_before = before.root().bundles().unwrap().get("ex:Run2").unwrap();
        let run2_after = after.root().bundles().unwrap().get("ex:Run2").unwrap();
        assert!(Arc::ptr_eq(run2_before, run2_after));
        assert!(has_node_of(&after, NodeVariant::Entity, "ex:Outcome"));
    }
}

mod generation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generated_identifiers_are_fresh_and_creatable() {
        let executor = MutationExecutor::default();
        let mut doc = notebook();

        for variant in NodeVariant::ALL {
            for _ in 0..3 {
                let id = generate_node_identifier(&doc, "ex", variant);
                assert!(!has_node_of(&doc, variant, &id));
                let local = id.strip_prefix("ex:").unwrap().to_string();
                doc = executor.create_node(&doc, variant, "ex", &local);
                assert_eq!(get_node_variant(&doc, &id).unwrap(), variant);
            }
        }

        let bundle = generate_bundle_identifier(&doc, "ex");
        assert_eq!(bundle, "ex:Bundle");
        let doc = executor.create_bundle(&doc, &bundle).unwrap();
        assert_eq!(generate_bundle_identifier(&doc, "ex"), "ex:Bundle1");
    }

    #[test]
    fn test_outgoing_relations_of_agent() {
        let doc = notebook();
        let outgoing: Vec<&str> = get_outgoing_relations(&doc, &ScopeId::Root, "prefix1:Agent")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(outgoing, vec!["_:id2"]);
    }
}
