//! Async-call guards that feed observable state.
//!
//! [`PromiseGuard`] wraps a caller-supplied async operation. Every
//! invocation gets an id from a per-guard counter; only the outcome of the
//! most recently started invocation is written to state, while each caller
//! still receives its own outcome.

mod error;
mod promise;

pub use error::GuardError;
pub use promise::PromiseGuard;
