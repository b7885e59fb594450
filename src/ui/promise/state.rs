//! State for a wrapped async operation.

use serde::Serialize;

use crate::ui::mvi::UiState;

/// Coarse lifecycle derived from a [`PromiseState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromisePhase {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Observable snapshot of a wrapped async operation.
///
/// `value` survives a new invocation starting, so a view can keep showing
/// the previous result under a spinner. `error` is cleared on start.
#[derive(Debug, Clone, PartialEq)]
pub struct PromiseState<T, E> {
    pub loading: bool,
    pub value: Option<T>,
    pub error: Option<E>,
    /// Id of the most recently started invocation; 0 before the first.
    latest_invocation: u64,
}

impl<T, E> Default for PromiseState<T, E> {
    fn default() -> Self {
        Self {
            loading: false,
            value: None,
            error: None,
            latest_invocation: 0,
        }
    }
}

impl<T, E> UiState for PromiseState<T, E>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    E: Clone + PartialEq + Send + Sync + 'static,
{
}

impl<T, E> PromiseState<T, E> {
    /// Id of the most recently started invocation.
    pub fn latest_invocation(&self) -> u64 {
        self.latest_invocation
    }

    pub(super) fn set_latest_invocation(&mut self, invocation: u64) {
        self.latest_invocation = invocation;
    }

    /// Whether an outcome for `invocation` may still be applied.
    pub fn is_current(&self, invocation: u64) -> bool {
        invocation == self.latest_invocation
    }

    pub fn phase(&self) -> PromisePhase {
        if self.loading {
            PromisePhase::Loading
        } else if self.error.is_some() {
            PromisePhase::Failed
        } else if self.value.is_some() {
            PromisePhase::Succeeded
        } else {
            PromisePhase::Idle
        }
    }

    /// True when nothing is loading and both slots are empty.
    pub fn is_idle(&self) -> bool {
        matches!(self.phase(), PromisePhase::Idle)
    }
}
