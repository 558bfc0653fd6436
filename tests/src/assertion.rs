//! Assertion types and builders for verifying step results.

use prov_constraint::validate_document;
use prov_core::{Document, NodeVariant};
use prov_query::has_node_of;
use serde_json::Value;

use crate::error::{ScenarioError, ScenarioResult};

/// Expectations for the outcome of one step.
#[derive(Default)]
pub struct Assertion {
    // Error assertions
    pub error: Option<String>,
    pub error_pattern: Option<String>,

    // Node assertions
    pub present: Vec<(NodeVariant, String)>,
    pub absent: Vec<(NodeVariant, String)>,

    // Serialized-form assertions
    pub nowhere: Vec<String>,
    pub values: Vec<(String, Value)>,

    // Validation assertions
    pub diagnostics: Option<usize>,

    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&Document) -> bool>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("error", &self.error)
            .field("error_pattern", &self.error_pattern)
            .field("present", &self.present)
            .field("absent", &self.absent)
            .field("nowhere", &self.nowhere)
            .field("values", &self.values)
            .field("diagnostics", &self.diagnostics)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the step to fail with a message containing `fragment`.
    pub fn error(mut self, fragment: impl Into<String>) -> Self {
        self.error = Some(fragment.into());
        self
    }

    /// Expect the step to fail with a message matching a regex.
    pub fn error_matching(mut self, pattern: impl Into<String>) -> Self {
        self.error_pattern = Some(pattern.into());
        self
    }

    /// Expect a node of `variant` somewhere in the document.
    pub fn has_node(mut self, variant: NodeVariant, id: impl Into<String>) -> Self {
        self.present.push((variant, id.into()));
        self
    }

    /// Expect no node of `variant` with this id in any scope.
    pub fn lacks_node(mut self, variant: NodeVariant, id: impl Into<String>) -> Self {
        self.absent.push((variant, id.into()));
        self
    }

    /// Expect `text` to appear as no key and no string value.
    pub fn nowhere(mut self, text: impl Into<String>) -> Self {
        self.nowhere.push(text.into());
        self
    }

    /// Expect the value at a JSON pointer into the serialized document.
    pub fn at(mut self, pointer: impl Into<String>, value: Value) -> Self {
        self.values.push((pointer.into(), value));
        self
    }

    /// Expect exactly `count` validation diagnostics.
    pub fn diagnostics(mut self, count: usize) -> Self {
        self.diagnostics = Some(count);
        self
    }

    pub fn check(mut self, f: impl Fn(&Document) -> bool + 'static) -> Self {
        self.custom = Some(Box::new(f));
        self
    }

    /// Verify the assertion against a step outcome.
    pub fn verify(&self, step: &str, result: &Result<Document, String>) -> ScenarioResult<()> {
        if let Some(ref expected) = self.error {
            return match result {
                Err(msg) if msg.contains(expected.as_str()) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error containing '{}', but step succeeded", expected),
                )),
            };
        }

        if let Some(ref pattern) = self.error_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            return match result {
                Err(msg) if re.is_match(msg) => Ok(()),
                Err(msg) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', got: {}", pattern, msg),
                )),
                Ok(_) => Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected error matching '{}', but step succeeded", pattern),
                )),
            };
        }

        let document = result
            .as_ref()
            .map_err(|msg| ScenarioError::assertion_failed(step, format!("step failed: {}", msg)))?;

        for (variant, id) in &self.present {
            if !has_node_of(document, *variant, id) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} {} to exist", variant, id),
                ));
            }
        }
        for (variant, id) in &self.absent {
            if has_node_of(document, *variant, id) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} {} to be absent", variant, id),
                ));
            }
        }

        if !self.nowhere.is_empty() || !self.values.is_empty() {
            let raw = document
                .to_value()
                .map_err(|e| ScenarioError::assertion_failed(step, e.to_string()))?;
            self.verify_serialized(step, &raw)?;
        }

        if let Some(expected) = self.diagnostics {
            let diagnostics = validate_document(document)
                .map_err(|e| ScenarioError::assertion_failed(step, e.to_string()))?;
            if diagnostics.len() != expected {
                let found: Vec<String> = diagnostics.into_iter().map(|d| d.to_string()).collect();
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected {} diagnostics, got {:?}", expected, found),
                ));
            }
        }

        if let Some(ref custom) = self.custom {
            if !custom(document) {
                return Err(ScenarioError::assertion_failed(step, "custom assertion failed"));
            }
        }

        Ok(())
    }

    fn verify_serialized(&self, step: &str, raw: &Value) -> ScenarioResult<()> {
        for text in &self.nowhere {
            if mentions(raw, text) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!("expected '{}' to appear nowhere", text),
                ));
            }
        }
        for (pointer, expected) in &self.values {
            match raw.pointer(pointer) {
                Some(actual) if actual == expected => {}
                Some(actual) => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("at {}: expected {}, got {}", pointer, expected, actual),
                    ))
                }
                None => {
                    return Err(ScenarioError::assertion_failed(
                        step,
                        format!("at {}: expected {}, found nothing", pointer, expected),
                    ))
                }
            }
        }
        Ok(())
    }
}

/// Check if `text` is an object key or string anywhere under `value`.
pub(crate) fn mentions(value: &Value, text: &str) -> bool {
    match value {
        Value::String(s) => s == text,
        Value::Array(items) => items.iter().any(|v| mentions(v, text)),
        Value::Object(map) => map.iter().any(|(k, v)| k == text || mentions(v, text)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mentions_keys_and_values() {
        let raw = json!({"agent": {"ex:A": {"k": ["x", {"$": "ex:B", "type": "xsd:QName"}]}}});
        assert!(mentions(&raw, "ex:A"));
        assert!(mentions(&raw, "ex:B"));
        assert!(mentions(&raw, "x"));
        assert!(!mentions(&raw, "ex:C"));
    }

    #[test]
    fn test_error_expectation() {
        let assertion = Assertion::new().error("not found");
        assert!(assertion.verify("s", &Err("Agent not found: ex:A".into())).is_ok());
        assert!(assertion.verify("s", &Ok(Document::new())).is_err());

        let pattern = Assertion::new().error_matching(r"^\w+ not found: ex:\w+");
        assert!(pattern.verify("s", &Err("Node not found: ex:A (during delete_node)".into())).is_ok());
        assert!(pattern.verify("s", &Err("Prefix not found: ex".into())).is_err());
    }

    #[test]
    fn test_pointer_expectation() {
        let doc = Document::from_value(json!({"entity": {"ex:E": {"k": 1}}})).unwrap();
        let ok = Assertion::new().at("/entity/ex:E/k", json!(1));
        let wrong = Assertion::new().at("/entity/ex:E/k", json!(2));
        assert!(ok.verify("s", &Ok(doc.clone())).is_ok());
        assert!(wrong.verify("s", &Ok(doc)).is_err());
    }
}
