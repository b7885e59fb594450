//! Intents for promise state.

use crate::ui::mvi::Intent;

/// Events that drive a [`PromiseState`](super::PromiseState).
#[derive(Debug, Clone)]
pub enum PromiseIntent<T, E> {
    /// A new invocation began.
    Start { invocation: u64 },

    /// An invocation finished successfully.
    Resolve { invocation: u64, value: T },

    /// An invocation failed.
    Reject { invocation: u64, error: E },

    /// Back to idle. Does not advance the invocation counter.
    Reset,

    /// Overwrite the value slot directly.
    SetValue { value: T },
}

impl<T, E> Intent for PromiseIntent<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
}
