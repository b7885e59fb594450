use std::fmt;

use serde::Serialize;

use crate::ui::promise::{PromisePhase, PromiseState};

/// What the issuer of a step observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The operation succeeded; stale or not, the caller gets the value.
    Resolved { value: i64 },
    /// The operation failed and the error reached the caller.
    Rejected { error: String },
    /// Ignored because another invocation was loading.
    Dropped,
    /// A retried invocation failed; the error only went to state.
    Swallowed,
    /// `retry` refused to run: no failed call to replay.
    RetryRejected,
    /// `reset` / `set_value` took effect.
    Applied,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Resolved { value } => write!(f, "resolved {}", value),
            StepOutcome::Rejected { error } => write!(f, "rejected ({})", error),
            StepOutcome::Dropped => write!(f, "dropped"),
            StepOutcome::Swallowed => write!(f, "swallowed"),
            StepOutcome::RetryRejected => write!(f, "retry rejected"),
            StepOutcome::Applied => write!(f, "applied"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub at_ms: u64,
    pub action: &'static str,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalState {
    pub phase: PromisePhase,
    pub loading: bool,
    pub value: Option<i64>,
    pub error: Option<String>,
}

impl From<PromiseState<i64, String>> for FinalState {
    fn from(state: PromiseState<i64, String>) -> Self {
        Self {
            phase: state.phase(),
            loading: state.loading,
            value: state.value,
            error: state.error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub name: Option<String>,
    pub steps: Vec<StepReport>,
    pub final_state: FinalState,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "scenario: {}",
            self.name.as_deref().unwrap_or("(unnamed)")
        )?;
        for step in &self.steps {
            writeln!(
                f,
                "  #{:<3} @{:>6}ms  {:<9} -> {}",
                step.index, step.at_ms, step.action, step.outcome
            )?;
        }

        let state = &self.final_state;
        write!(
            f,
            "final: phase={:?} loading={} value={} error={}",
            state.phase,
            state.loading,
            state
                .value
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            state.error.as_deref().unwrap_or("-"),
        )
    }
}
