//! Reusable UI-state utilities.
//!
//! The centrepiece is [`guard::PromiseGuard`], an async-call wrapper that
//! exposes loading/value/error state and keeps only the outcome of the
//! most recently started invocation. State transitions are expressed as
//! MVI reducers under [`ui`].

pub mod config;
pub mod guard;
pub mod logging;
pub mod simulate;
pub mod ui;
