use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::SimulationConfig;
use crate::guard::PromiseGuard;

use super::report::{SimulationReport, StepOutcome, StepReport};
use super::scenario::{Scenario, ScenarioError, Step};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("Simulated call task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Arguments of the scripted operation. Retry replays them verbatim, so
/// the attempt count is tracked per originating step.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedCall {
    pub step: usize,
    pub delay_ms: u64,
    pub value: i64,
    pub fail_attempts: u32,
}

enum Slot {
    Done(StepOutcome),
    Pending(JoinHandle<StepOutcome>),
}

type ScenarioGuard = PromiseGuard<ScriptedCall, i64, String>;

fn scripted_guard() -> ScenarioGuard {
    let attempts: Arc<Mutex<HashMap<usize, u32>>> = Arc::default();

    PromiseGuard::labeled("scenario", move |call: ScriptedCall| {
        let attempt = {
            let mut attempts = attempts.lock();
            let count = attempts.entry(call.step).or_insert(0);
            *count += 1;
            *count
        };

        async move {
            tokio::time::sleep(Duration::from_millis(call.delay_ms)).await;
            if attempt <= call.fail_attempts {
                Err(format!("attempt {} failed", attempt))
            } else {
                Ok(call.value)
            }
        }
    })
}

/// Replay `scenario` on the tokio clock and report what every step saw.
///
/// Steps run at `at_ms` after the start in file order. Calls start
/// synchronously at their step time; their completions are collected once
/// every step has been issued.
pub async fn run_scenario(
    scenario: &Scenario,
    config: &SimulationConfig,
) -> Result<SimulationReport, SimulationError> {
    scenario.validate()?;

    let guard = scripted_guard();
    let origin = Instant::now();
    let mut slots = Vec::with_capacity(scenario.steps.len());

    for (index, step) in scenario.steps.iter().enumerate() {
        tokio::time::sleep_until(origin + Duration::from_millis(step.at_ms())).await;
        tracing::debug!(index, action = step.action_name(), "Running step");
        slots.push(run_step(&guard, index, step, config));
    }

    let mut steps = Vec::with_capacity(slots.len());
    for ((index, step), slot) in scenario.steps.iter().enumerate().zip(slots) {
        let outcome = match slot {
            Slot::Done(outcome) => outcome,
            Slot::Pending(handle) => handle.await?,
        };
        steps.push(StepReport {
            index,
            at_ms: step.at_ms(),
            action: step.action_name(),
            outcome,
        });
    }

    let report = SimulationReport {
        name: scenario.name.clone(),
        steps,
        final_state: guard.state().into(),
    };
    tracing::info!(
        steps = report.steps.len(),
        phase = ?report.final_state.phase,
        "Scenario finished"
    );
    Ok(report)
}

fn run_step(guard: &ScenarioGuard, index: usize, step: &Step, config: &SimulationConfig) -> Slot {
    match step {
        Step::Call {
            delay_ms,
            value,
            fail_attempts,
            ..
        } => {
            let call = ScriptedCall {
                step: index,
                delay_ms: delay_ms.unwrap_or(config.default_delay_ms),
                value: *value,
                fail_attempts: *fail_attempts,
            };
            match guard.start(call) {
                Some(pending) => Slot::Pending(tokio::spawn(async move {
                    match pending.await {
                        Ok(value) => StepOutcome::Resolved { value },
                        Err(error) => StepOutcome::Rejected { error },
                    }
                })),
                None => Slot::Done(StepOutcome::Dropped),
            }
        }

        Step::Retry { .. } => match guard.retry() {
            Ok(pending) => Slot::Pending(tokio::spawn(async move {
                match pending.await {
                    Some(value) => StepOutcome::Resolved { value },
                    None => StepOutcome::Swallowed,
                }
            })),
            Err(_) => Slot::Done(StepOutcome::RetryRejected),
        },

        Step::Reset { .. } => {
            guard.reset();
            Slot::Done(StepOutcome::Applied)
        }

        Step::SetValue { value, .. } => {
            guard.set_value(*value);
            Slot::Done(StepOutcome::Applied)
        }
    }
}
