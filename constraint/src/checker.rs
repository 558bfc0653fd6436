//! Referential-integrity checking.

use std::iter;
use std::sync::Arc;

use prov_core::{
    parse_prefix, resolve_prefix_value, AttributeSet, AttributeValue, Document, NodeVariant,
    ScopeId, ScopeRef, BLANK_PREFIX,
};
use prov_query::has_node_in;
use prov_registry::{AttributeDef, Registry};
use serde_json::Value;
use tracing::{debug, warn};

use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::ConstraintResult;
use crate::schema::SchemaValidator;
use crate::ValidatorConfig;

/// Validate a document with the standard registry and default options.
///
/// The schema is compiled on first use and shared afterwards.
pub fn validate_document(document: &Document) -> ConstraintResult<Diagnostics> {
    Ok(IntegrityValidator::new(Registry::prov())?.validate(document))
}

/// Document validator: schema first, then referential checks.
#[derive(Debug)]
pub struct IntegrityValidator<'r> {
    registry: &'r Registry,
    config: ValidatorConfig,
    schema: Arc<SchemaValidator>,
}

impl<'r> IntegrityValidator<'r> {
    /// Create a validator for `registry`.
    ///
    /// The standard registry reuses the process-wide compiled schema; any
    /// other registry compiles its own.
    pub fn new(registry: &'r Registry) -> ConstraintResult<Self> {
        let schema = if std::ptr::eq(registry, Registry::prov()) {
            SchemaValidator::prov()?
        } else {
            Arc::new(SchemaValidator::new(registry)?)
        };
        Ok(Self {
            registry,
            config: ValidatorConfig::default(),
            schema,
        })
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a decoded document.
    pub fn validate(&self, document: &Document) -> Diagnostics {
        match document.to_value() {
            Ok(raw) => self.validate_checked(document, &raw),
            Err(e) => iter::once(Diagnostic::schema("", e.to_string())).collect(),
        }
    }

    /// Validate raw JSON, decoding it only if it passes the schema.
    pub fn validate_value(&self, raw: &Value) -> Diagnostics {
        let schema = self.check_schema(raw);
        if !schema.is_empty() {
            return schema;
        }
        match Document::from_value(raw.clone()) {
            Ok(document) => self.check_references(&document),
            Err(e) => iter::once(Diagnostic::schema("", e.to_string())).collect(),
        }
    }

    fn validate_checked(&self, document: &Document, raw: &Value) -> Diagnostics {
        let schema = self.check_schema(raw);
        if !schema.is_empty() {
            return schema;
        }
        self.check_references(document)
    }

    fn check_schema(&self, raw: &Value) -> Diagnostics {
        let diagnostics = self.schema.check(raw);
        if !diagnostics.is_empty() {
            warn!(
                violations = diagnostics.len(),
                "schema validation failed, skipping referential checks"
            );
        }
        diagnostics
    }

    /// Run the referential checks enabled in the config.
    ///
    /// Assumes the document already has schema shape.
    pub fn check_references(&self, document: &Document) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        for scope in document.scopes() {
            if self.config.check_namespaces {
                self.check_namespaces(document, scope, &mut diagnostics);
            }
            if self.config.check_endpoints {
                self.check_endpoints(document, scope, &mut diagnostics);
            }
            if self.config.check_attribute_references {
                self.check_attribute_references(document, scope, &mut diagnostics);
            }
        }
        debug!(diagnostics = diagnostics.len(), "referential checks complete");
        diagnostics
    }

    // ==================== Namespaces ====================

    fn check_namespaces(&self, document: &Document, scope: ScopeRef<'_>, out: &mut Diagnostics) {
        if let Some(bundle_id) = scope.bundle {
            let prefix = parse_prefix(bundle_id);
            if !self.resolves(document, prefix, None) {
                out.push(
                    unresolved("bundle", bundle_id, prefix)
                        .with_variant("bundle")
                        .with_identifier(bundle_id),
                );
            }
        }

        for (variant, container) in scope.scope.node_containers() {
            for (id, attrs) in container.iter() {
                let names = iter::once(id.as_str()).chain(attrs.keys().map(String::as_str));
                for prefix in self.missing_prefixes(document, scope.bundle, names) {
                    out.push(
                        unresolved(variant.key(), id, prefix)
                            .with_bundle(scope.bundle)
                            .with_variant(variant.key())
                            .with_identifier(id.as_str()),
                    );
                }
            }
        }

        // Relation identifiers are usually blank; only their keys are checked.
        for (variant, container) in scope.scope.relation_containers() {
            for (id, record) in container.iter() {
                let names = record.keys().map(String::as_str);
                for prefix in self.missing_prefixes(document, scope.bundle, names) {
                    out.push(
                        unresolved(variant.key(), id, prefix)
                            .with_bundle(scope.bundle)
                            .with_variant(variant.key())
                            .with_identifier(id.as_str()),
                    );
                }
            }
        }
    }

    /// Distinct unresolved prefixes among `names`, in first-seen order.
    fn missing_prefixes<'a>(
        &self,
        document: &Document,
        bundle: Option<&str>,
        names: impl Iterator<Item = &'a str>,
    ) -> Vec<&'a str> {
        let mut missing: Vec<&'a str> = Vec::new();
        for name in names {
            let prefix = parse_prefix(name);
            if !self.resolves(document, prefix, bundle) && !missing.contains(&prefix) {
                missing.push(prefix);
            }
        }
        missing
    }

    fn resolves(&self, document: &Document, prefix: &str, bundle: Option<&str>) -> bool {
        prefix == BLANK_PREFIX
            || self.config.is_implicit(prefix)
            || resolve_prefix_value(document, prefix, bundle).is_some()
    }

    // ==================== Endpoints ====================

    fn check_endpoints(&self, document: &Document, scope: ScopeRef<'_>, out: &mut Diagnostics) {
        let scope_id = scope.id();
        for (variant, container) in scope.scope.relation_containers() {
            let def = self.registry.relation(variant);
            for (id, record) in container.iter() {
                for endpoint in def.endpoints() {
                    // Non-string endpoints are a schema violation.
                    let Some(target) = record.get(endpoint.key).and_then(AttributeValue::as_str) else {
                        continue;
                    };
                    if !node_exists(document, &scope_id, &endpoint.constraint.variants(), target) {
                        out.push(
                            Diagnostic::new(
                                DiagnosticKind::DanglingEndpoint,
                                format!(
                                    "{} {} references missing {} {} through {}",
                                    variant.key(),
                                    id,
                                    endpoint.constraint,
                                    target,
                                    endpoint.key
                                ),
                            )
                            .with_bundle(scope.bundle)
                            .with_variant(variant.key())
                            .with_identifier(id.as_str())
                            .with_key(endpoint.key)
                            .with_target(target),
                        );
                    }
                }
            }
        }
    }

    // ==================== Attribute references ====================

    fn check_attribute_references(
        &self,
        document: &Document,
        scope: ScopeRef<'_>,
        out: &mut Diagnostics,
    ) {
        let scope_id = scope.id();
        for (variant, container) in scope.scope.node_containers() {
            for (id, attrs) in container.iter() {
                let dangling = self.dangling_references(document, &scope_id, attrs, |key| {
                    self.registry.node_attribute(variant, key)
                });
                for (key, target) in dangling {
                    out.push(dangling_reference(variant.key(), id, key, target).with_bundle(scope.bundle));
                }
            }
        }
        for (variant, container) in scope.scope.relation_containers() {
            for (id, record) in container.iter() {
                let dangling = self.dangling_references(document, &scope_id, record, |key| {
                    self.registry.relation_attribute(variant, key)
                });
                for (key, target) in dangling {
                    out.push(dangling_reference(variant.key(), id, key, target).with_bundle(scope.bundle));
                }
            }
        }
    }

    /// Node-valued attributes of a record whose target does not exist.
    fn dangling_references<'a>(
        &self,
        document: &Document,
        scope: &ScopeId,
        attrs: &'a AttributeSet,
        definition: impl Fn(&str) -> Option<&'static AttributeDef>,
    ) -> Vec<(&'a str, &'a str)> {
        attrs
            .iter()
            .filter_map(|(key, value)| {
                let expected = definition(key.as_str())?.range.node_variant()?;
                let target = value.as_str()?;
                (!node_exists(document, scope, &[expected], target)).then_some((key.as_str(), target))
            })
            .collect()
    }
}

/// Check for a node in `scope` or, failing that, the root.
fn node_exists(document: &Document, scope: &ScopeId, variants: &[NodeVariant], id: &str) -> bool {
    variants.iter().any(|variant| {
        has_node_in(document, scope, *variant, id) || has_node_in(document, &ScopeId::Root, *variant, id)
    })
}

fn unresolved(kind: &str, id: &str, prefix: &str) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::UnresolvedPrefix,
        format!("{} {} uses undeclared prefix '{}'", kind, id, prefix),
    )
    .with_prefix(prefix)
}

fn dangling_reference(variant: &str, id: &str, key: &str, target: &str) -> Diagnostic {
    Diagnostic::new(
        DiagnosticKind::DanglingAttributeReference,
        format!("{} {} attribute {} references missing node {}", variant, id, key, target),
    )
    .with_variant(variant)
    .with_identifier(id)
    .with_key(key)
    .with_target(target)
}
