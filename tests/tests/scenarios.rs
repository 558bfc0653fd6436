//! Reference scenarios for the document engine.

use prov_core::resolve_prefix_value;
use prov_query::{generate_node_identifier, generate_relation_identifier};
use pretty_assertions::assert_eq;
use prov_tests::prelude::*;

mod identifier_generation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generated_agent_identifiers_count_up() {
        // GIVEN
        let doc = Document::from_value(json!({
            "prefix": {"ex": "http://example.com/"},
            "agent": {"ex:Alice": {}}
        }))
        .unwrap();

        // WHEN
        let first = generate_node_identifier(&doc, "ex", NodeVariant::Agent);
        let doc = MutationExecutor::default().create_node(&doc, NodeVariant::Agent, "ex", "Agent");
        let second = generate_node_identifier(&doc, "ex", NodeVariant::Agent);

        // THEN
        assert_eq!(first, "ex:Agent");
        assert_eq!(second, "ex:Agent1");
    }

    #[test]
    fn test_relation_identifiers_skip_taken() {
        let doc = Document::from_value(fixtures::attribution()).unwrap();
        assert_eq!(generate_relation_identifier(&doc), "_:id2");
    }
}

mod delete_cascade {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("delete_cascade")
            .seed(fixtures::attribution())
            .step(
                "delete_alice",
                |ex, doc| ex.delete_node(doc, NodeVariant::Agent, "ex:Alice"),
                |a| {
                    a.lacks_node(NodeVariant::Agent, "ex:Alice")
                        .has_node(NodeVariant::Entity, "ex:Report")
                        .at("/wasAttributedTo", json!({}))
                        .diagnostics(0)
                },
            )
            .step(
                "delete_alice_again",
                |ex, doc| ex.delete_node(doc, NodeVariant::Agent, "ex:Alice"),
                |a| a.error("not found: ex:Alice"),
            )
    }

    #[test]
    fn test_deleting_an_agent_removes_its_attribution() {
        scenario().run().unwrap();
    }
}

mod prefix_shadowing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundle_prefix_wins_over_root() {
        // GIVEN
        let doc = Document::from_value(fixtures::shadowed_prefix()).unwrap();

        // WHEN
        let in_bundle = resolve_prefix_value(&doc, "ex", Some("B"));
        let at_root = resolve_prefix_value(&doc, "ex", None);

        // THEN
        assert_eq!(in_bundle, Some("http://other.com/"));
        assert_eq!(at_root, Some("http://example.com/"));
    }
}

mod dangling_endpoint {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_diagnostic_for_missing_entity() {
        // GIVEN
        let doc = Document::from_value(fixtures::dangling_usage()).unwrap();

        // WHEN
        let diagnostics = validate_document(&doc).unwrap();

        // THEN
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = &diagnostics.all()[0];
        assert_eq!(diagnostic.kind, DiagnosticKind::DanglingEndpoint);
        assert_eq!(diagnostic.variant.as_deref(), Some("used"));
        assert_eq!(diagnostic.key.as_deref(), Some("prov:entity"));
        assert_eq!(diagnostic.target.as_deref(), Some("prefix1:MissingEntity"));
    }

    pub fn scenario() -> Scenario {
        Scenario::new("repair_dangling_usage")
            .seed(fixtures::dangling_usage())
            .step("as_loaded", |_, doc| Ok(doc.clone()), |a| a.diagnostics(1))
            .step(
                "create_missing_entity",
                |ex, doc| Ok(ex.create_node(doc, NodeVariant::Entity, "prefix1", "MissingEntity")),
                |a| a.diagnostics(0),
            )
    }

    #[test]
    fn test_creating_the_endpoint_repairs_the_document() {
        scenario().run().unwrap();
    }
}

mod identifier_rename {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("rename_agent")
            .seed(json!({
                "prefix": {"prefix1": "http://one.example/"},
                "agent": {"prefix1:Agent": {}},
                "entity": {"prefix1:Entity": {}},
                "wasAttributedTo": {
                    "_:id1": {"prov:entity": "prefix1:Entity", "prov:agent": "prefix1:Agent"}
                }
            }))
            .step(
                "rename",
                |ex, doc| ex.rename_identifier(doc, "prefix1:Agent", "prefix1:Bob"),
                |a| {
                    a.nowhere("prefix1:Agent")
                        .has_node(NodeVariant::Agent, "prefix1:Bob")
                        .at("/wasAttributedTo/_:id1/prov:agent", json!("prefix1:Bob"))
                        .diagnostics(0)
                },
            )
    }

    #[test]
    fn test_rename_rewrites_key_and_reference() {
        scenario().run().unwrap();
    }
}
