use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Scenario has no steps")]
    Empty,

    #[error("Step {index} starts at {at_ms}ms, before the previous step at {previous_ms}ms")]
    OutOfOrder {
        index: usize,
        at_ms: u64,
        previous_ms: u64,
    },
}

/// A timeline of guard interactions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One timed interaction. `at_ms` is measured from scenario start.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Call {
        at_ms: u64,
        /// Falls back to `simulation.default_delay_ms`.
        #[serde(default)]
        delay_ms: Option<u64>,
        value: i64,
        /// Attempts of this step that fail before one succeeds.
        #[serde(default)]
        fail_attempts: u32,
    },
    Reset {
        at_ms: u64,
    },
    Retry {
        at_ms: u64,
    },
    SetValue {
        at_ms: u64,
        value: i64,
    },
}

impl Step {
    pub fn at_ms(&self) -> u64 {
        match self {
            Step::Call { at_ms, .. }
            | Step::Reset { at_ms }
            | Step::Retry { at_ms }
            | Step::SetValue { at_ms, .. } => *at_ms,
        }
    }

    pub fn action_name(&self) -> &'static str {
        match self {
            Step::Call { .. } => "call",
            Step::Reset { .. } => "reset",
            Step::Retry { .. } => "retry",
            Step::SetValue { .. } => "set_value",
        }
    }
}

impl Scenario {
    pub fn from_toml_str(content: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load_from(path: &Path) -> Result<Self, ScenarioError> {
        let content = fs::read_to_string(path).map_err(|e| ScenarioError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Checks:
    /// - At least one step
    /// - `at_ms` never decreases
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.steps.is_empty() {
            return Err(ScenarioError::Empty);
        }

        for (index, pair) in self.steps.windows(2).enumerate() {
            let (previous, step) = (&pair[0], &pair[1]);
            if step.at_ms() < previous.at_ms() {
                return Err(ScenarioError::OutOfOrder {
                    index: index + 1,
                    at_ms: step.at_ms(),
                    previous_ms: previous.at_ms(),
                });
            }
        }

        Ok(())
    }
}
