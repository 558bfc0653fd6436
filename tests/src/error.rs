//! Harness errors.

use thiserror::Error;

/// Why a scenario did not pass.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Scenario '{scenario}' has an invalid seed: {message}")]
    InvalidSeed { scenario: String, message: String },

    #[error("Step '{step}': {message}")]
    AssertionFailed { step: String, message: String },
}

impl ScenarioError {
    pub fn invalid_seed(scenario: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSeed {
            scenario: scenario.into(),
            message: message.into(),
        }
    }

    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
