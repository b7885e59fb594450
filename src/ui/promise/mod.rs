//! Loading/value/error state for a wrapped async operation.
//!
//! # Architecture
//!
//! - `state.rs` - `PromiseState` snapshot and derived `PromisePhase`
//! - `intent.rs` - invocation lifecycle events
//! - `reducer.rs` - transitions, including the latest-invocation check
//!
//! The async side lives in [`crate::guard::PromiseGuard`], which only
//! dispatches intents.

mod intent;
mod reducer;
mod state;

pub use intent::PromiseIntent;
pub use reducer::PromiseReducer;
pub use state::{PromisePhase, PromiseState};
