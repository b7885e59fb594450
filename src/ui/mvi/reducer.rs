//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current one and an intent.
///
/// Reducers own every transition rule, including staleness checks, so
/// the types that drive them only decide *which* intent to dispatch.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Pure transition: no I/O, no clocks, no shared state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
