//! Validator options.

use serde::{Deserialize, Serialize};

/// Which referential checks run, and which prefixes need no declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    pub check_namespaces: bool,
    pub check_endpoints: bool,
    pub check_attribute_references: bool,
    /// Prefixes that are predefined; identifiers using them always resolve.
    pub implicit_prefixes: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            check_namespaces: true,
            check_endpoints: true,
            check_attribute_references: true,
            implicit_prefixes: vec!["prov".to_string(), "xsd".to_string(), "provviz".to_string()],
        }
    }
}

impl ValidatorConfig {
    /// Only the schema check and endpoint check.
    pub fn minimal() -> Self {
        Self {
            check_namespaces: false,
            check_attribute_references: false,
            ..Self::default()
        }
    }

    pub fn with_check_namespaces(mut self, check: bool) -> Self {
        self.check_namespaces = check;
        self
    }

    pub fn with_check_endpoints(mut self, check: bool) -> Self {
        self.check_endpoints = check;
        self
    }

    pub fn with_check_attribute_references(mut self, check: bool) -> Self {
        self.check_attribute_references = check;
        self
    }

    pub fn with_implicit_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.implicit_prefixes.push(prefix.into());
        self
    }

    /// Check if a prefix is predefined.
    pub fn is_implicit(&self, prefix: &str) -> bool {
        self.implicit_prefixes.iter().any(|p| p == prefix)
    }
}
