//! Mutation options.

use serde::{Deserialize, Serialize};

/// Options controlling how mutations treat their input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Reject catalogued attribute keys whose value falls outside the
    /// definition's range (e.g. a non-hex `provviz:color`).
    pub enforce_value_ranges: bool,
    /// Write `default:Name` instead of `Name` when creating a node under
    /// the `default` prefix.
    pub qualify_default_prefix: bool,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            enforce_value_ranges: true,
            qualify_default_prefix: false,
        }
    }
}

impl MutationConfig {
    /// Configuration that accepts any attribute value.
    pub fn lenient() -> Self {
        Self {
            enforce_value_ranges: false,
            ..Self::default()
        }
    }

    pub fn with_enforce_value_ranges(mut self, enforce: bool) -> Self {
        self.enforce_value_ranges = enforce;
        self
    }

    pub fn with_qualify_default_prefix(mut self, qualify: bool) -> Self {
        self.qualify_default_prefix = qualify;
        self
    }
}
