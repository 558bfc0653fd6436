//! Structural PROV-JSON schema.
//!
//! The schema is generated from the registry, so relation records require
//! exactly the endpoint keys the definition tables declare. Bundles are one
//! level deep: a bundle declaring its own `bundle` map does not conform.

use std::sync::{Arc, LazyLock};

use jsonschema::{Draft, Validator};
use prov_core::{NodeVariant, ScopeField};
use prov_registry::Registry;
use serde_json::{json, Map, Value};

use crate::diagnostic::{Diagnostic, Diagnostics};
use crate::error::{ConstraintError, ConstraintResult};

static PROV_VALIDATOR: LazyLock<ConstraintResult<Arc<SchemaValidator>>> =
    LazyLock::new(|| SchemaValidator::new(Registry::prov()).map(Arc::new));

/// Build the JSON Schema (draft 2020-12) of a PROV-JSON document.
pub fn prov_schema(registry: &Registry) -> Value {
    let mut defs = Map::new();
    defs.insert(
        "typedLiteral".into(),
        json!({
            "type": "object",
            "properties": {
                "$": {"type": "string"},
                "type": {"type": "string"},
                "lang": {"type": "string"}
            },
            "required": ["$", "type"],
            "additionalProperties": false
        }),
    );
    defs.insert(
        "literal".into(),
        json!({
            "anyOf": [
                {"type": "string"},
                {"type": "number"},
                {"type": "boolean"},
                {"$ref": "#/$defs/typedLiteral"}
            ]
        }),
    );
    defs.insert(
        "value".into(),
        json!({
            "anyOf": [
                {"$ref": "#/$defs/literal"},
                {"type": "array", "items": {"$ref": "#/$defs/literal"}, "minItems": 1}
            ]
        }),
    );
    defs.insert(
        "attributes".into(),
        json!({"type": "object", "additionalProperties": {"$ref": "#/$defs/value"}}),
    );
    defs.insert(
        "nodeContainer".into(),
        json!({"type": "object", "additionalProperties": {"$ref": "#/$defs/attributes"}}),
    );
    defs.insert(
        "prefixMap".into(),
        json!({"type": "object", "additionalProperties": {"type": "string"}}),
    );

    let mut scope_properties = Map::new();
    scope_properties.insert(ScopeField::PREFIX_KEY.into(), json!({"$ref": "#/$defs/prefixMap"}));
    for variant in NodeVariant::ALL {
        scope_properties.insert(variant.key().into(), json!({"$ref": "#/$defs/nodeContainer"}));
    }
    for def in registry.all_relations() {
        let name = def.variant.key();
        defs.insert(
            name.into(),
            json!({
                "type": "object",
                "additionalProperties": {
                    "type": "object",
                    "properties": {
                        (def.domain.key): {"type": "string"},
                        (def.range.key): {"type": "string"}
                    },
                    "required": [def.domain.key, def.range.key],
                    "additionalProperties": {"$ref": "#/$defs/value"}
                }
            }),
        );
        scope_properties.insert(name.into(), json!({ "$ref": format!("#/$defs/{}", name) }));
    }
    defs.insert(
        "bundleScope".into(),
        json!({
            "type": "object",
            "properties": scope_properties.clone(),
            "additionalProperties": false
        }),
    );
    scope_properties.insert(
        ScopeField::BUNDLE_KEY.into(),
        json!({"type": "object", "additionalProperties": {"$ref": "#/$defs/bundleScope"}}),
    );
    defs.insert(
        "scope".into(),
        json!({
            "type": "object",
            "properties": scope_properties,
            "additionalProperties": false
        }),
    );

    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "PROV-JSON document",
        "$ref": "#/$defs/scope",
        "$defs": defs
    })
}

/// Compiled structural validator.
pub struct SchemaValidator {
    validator: Validator,
}

impl SchemaValidator {
    /// Compile the schema for `registry`.
    pub fn new(registry: &Registry) -> ConstraintResult<Self> {
        Self::from_schema(&prov_schema(registry))
    }

    /// The schema of the standard registry, compiled once per process.
    pub fn prov() -> ConstraintResult<Arc<Self>> {
        PROV_VALIDATOR.as_ref().map(Arc::clone).map_err(Clone::clone)
    }

    /// Compile an arbitrary draft 2020-12 schema.
    pub fn from_schema(schema: &Value) -> ConstraintResult<Self> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft202012)
            .build(schema)
            .map_err(|e| ConstraintError::invalid_schema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Check if a raw document conforms.
    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }

    /// One diagnostic per schema violation.
    pub fn check(&self, document: &Value) -> Diagnostics {
        self.validator
            .iter_errors(document)
            .map(|err| Diagnostic::schema(err.instance_path().to_string(), err.to_string()))
            .collect()
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator").finish_non_exhaustive()
    }
}
