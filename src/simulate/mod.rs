//! Scripted call timelines replayed against a [`PromiseGuard`].
//!
//! A scenario lists timed steps (`call`, `reset`, `retry`, `set_value`).
//! Calls run a scripted operation that sleeps, then fails a configured
//! number of times before succeeding. The report shows what each step's
//! caller saw next to the guard's final state, which makes the
//! latest-wins behaviour visible.
//!
//! [`PromiseGuard`]: crate::guard::PromiseGuard

mod report;
mod runner;
mod scenario;

pub use report::{FinalState, SimulationReport, StepOutcome, StepReport};
pub use runner::{run_scenario, ScriptedCall, SimulationError};
pub use scenario::{Scenario, ScenarioError, Step};
