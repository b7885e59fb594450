//! Latest-invocation-wins wrapper around an async operation.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;

use crate::ui::mvi::Reducer;
use crate::ui::promise::{PromiseIntent, PromisePhase, PromiseReducer, PromiseState};

use super::error::GuardError;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
type Operation<A, T, E> = dyn Fn(A) -> BoxFuture<Result<T, E>> + Send + Sync;

const DEFAULT_LABEL: &str = "promise";

/// Wraps an async operation so that only the most recently started
/// invocation updates the observable [`PromiseState`].
///
/// `A` is the argument value (use a tuple for several arguments). Clones
/// share the same state and invocation counter.
///
/// Superseded invocations are not cancelled: they run to completion and
/// their outcome goes to whoever awaited them, but never into state.
pub struct PromiseGuard<A, T, E> {
    shared: Arc<Shared<A, T, E>>,
}

struct Shared<A, T, E> {
    label: String,
    operation: Box<Operation<A, T, E>>,
    invocations: Mutex<Invocations<A>>,
    state: watch::Sender<PromiseState<T, E>>,
}

struct Invocations<A> {
    /// Id handed to the last invocation that actually started.
    last_started: u64,
    /// Arguments of that invocation, replayed by `retry`.
    last_args: Option<A>,
}

impl<A, T, E> Clone for PromiseGuard<A, T, E> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A, T, E> PromiseGuard<A, T, E>
where
    A: Clone + Send + 'static,
    T: Clone + PartialEq + Send + Sync + 'static,
    E: Clone + PartialEq + Send + Sync + 'static,
{
    /// Create a guard around `operation`.
    pub fn new<F, Fut>(operation: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::labeled(DEFAULT_LABEL, operation)
    }

    /// Create a guard whose log events carry `label`.
    pub fn labeled<F, Fut>(label: impl Into<String>, operation: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        let (state, _) = watch::channel(PromiseState::default());
        let operation: Box<Operation<A, T, E>> =
            Box::new(move |args: A| -> BoxFuture<Result<T, E>> { Box::pin(operation(args)) });

        Self {
            shared: Arc::new(Shared {
                label: label.into(),
                operation,
                invocations: Mutex::new(Invocations {
                    last_started: 0,
                    last_args: None,
                }),
                state,
            }),
        }
    }

    /// Begin an invocation right now.
    ///
    /// Returns `None` without running the operation when an invocation is
    /// already loading; the argument record is left untouched in that case.
    /// Otherwise the returned future resolves to the operation's own
    /// outcome, and writes it to state only if no later invocation started.
    pub fn start(&self, args: A) -> Option<impl Future<Output = Result<T, E>> + Send + 'static> {
        let invocation = {
            let mut invocations = self.shared.invocations.lock();
            let loading = self.shared.state.borrow().loading;
            if loading {
                tracing::debug!(
                    guard = %self.shared.label,
                    in_flight = invocations.last_started,
                    "Call dropped while loading"
                );
                return None;
            }

            invocations.last_started += 1;
            invocations.last_args = Some(args.clone());
            let invocation = invocations.last_started;
            self.shared.dispatch(PromiseIntent::Start { invocation });
            invocation
        };

        tracing::trace!(guard = %self.shared.label, invocation, "Invocation started");

        let pending = (self.shared.operation)(args);
        let shared = Arc::clone(&self.shared);
        Some(async move {
            let outcome = pending.await;
            let intent = match &outcome {
                Ok(value) => PromiseIntent::Resolve {
                    invocation,
                    value: value.clone(),
                },
                Err(error) => PromiseIntent::Reject {
                    invocation,
                    error: error.clone(),
                },
            };
            shared.settle(invocation, intent);
            outcome
        })
    }

    /// Run the operation and wait for it.
    ///
    /// `Ok(None)` means the call was dropped because another invocation was
    /// loading. Errors are returned even when this invocation went stale.
    pub async fn call(&self, args: A) -> Result<Option<T>, E> {
        match self.start(args) {
            Some(pending) => pending.await.map(Some),
            None => Ok(None),
        }
    }

    /// Like [`call`](Self::call), but a failure only lands in state.
    pub async fn call_ignore_error(&self, args: A) -> Option<T> {
        self.shared.ignore_error(self.call(args).await)
    }

    /// Replay the last recorded arguments the way
    /// [`call_ignore_error`](Self::call_ignore_error) would.
    ///
    /// The invocation starts before this returns; the future only waits
    /// for it.
    ///
    /// # Errors
    /// [`GuardError::InvalidRetry`] unless a call has recorded arguments
    /// and its error is still held in state. Checked before anything runs.
    pub fn retry(&self) -> Result<impl Future<Output = Option<T>> + Send + 'static, GuardError> {
        let args = {
            let invocations = self.shared.invocations.lock();
            let has_error = self.shared.state.borrow().error.is_some();
            match invocations.last_args.as_ref() {
                Some(args) if has_error => args.clone(),
                _ => return Err(GuardError::InvalidRetry),
            }
        };

        tracing::debug!(guard = %self.shared.label, "Retrying last call");
        let pending = self.start(args);
        let shared = Arc::clone(&self.shared);
        Ok(async move {
            let outcome = match pending {
                Some(pending) => pending.await.map(Some),
                None => Ok(None),
            };
            shared.ignore_error(outcome)
        })
    }

    /// Back to idle, regardless of invocations in flight.
    ///
    /// Does not advance the invocation counter, so a result that arrives
    /// later from the latest invocation is still written.
    pub fn reset(&self) {
        self.shared.dispatch(PromiseIntent::Reset);
    }

    /// Overwrite the value slot without going through an invocation.
    pub fn set_value(&self, value: T) {
        self.shared.dispatch(PromiseIntent::SetValue { value });
    }

    pub fn state(&self) -> PromiseState<T, E> {
        self.shared.state.borrow().clone()
    }

    pub fn loading(&self) -> bool {
        self.shared.state.borrow().loading
    }

    pub fn value(&self) -> Option<T> {
        self.shared.state.borrow().value.clone()
    }

    pub fn error(&self) -> Option<E> {
        self.shared.state.borrow().error.clone()
    }

    pub fn phase(&self) -> PromisePhase {
        self.shared.state.borrow().phase()
    }

    /// Receiver that is marked changed only when the state value changes.
    pub fn subscribe(&self) -> watch::Receiver<PromiseState<T, E>> {
        self.shared.state.subscribe()
    }

    pub fn label(&self) -> &str {
        &self.shared.label
    }
}

impl<A, T, E> Shared<A, T, E>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    E: Clone + PartialEq + Send + Sync + 'static,
{
    /// Apply `intent`; observers are notified only on an actual change.
    fn dispatch(&self, intent: PromiseIntent<T, E>) -> bool {
        self.state.send_if_modified(|state| apply(state, intent))
    }

    fn ignore_error(&self, outcome: Result<Option<T>, E>) -> Option<T> {
        match outcome {
            Ok(value) => value,
            Err(_) => {
                tracing::debug!(guard = %self.label, "Swallowed operation error");
                None
            }
        }
    }

    fn settle(&self, invocation: u64, intent: PromiseIntent<T, E>) {
        self.state.send_if_modified(|state| {
            if !state.is_current(invocation) {
                tracing::trace!(
                    guard = %self.label,
                    invocation,
                    latest = state.latest_invocation(),
                    "Discarding stale outcome"
                );
            }
            apply(state, intent)
        });
    }
}

fn apply<T, E>(state: &mut PromiseState<T, E>, intent: PromiseIntent<T, E>) -> bool
where
    T: Clone + PartialEq + Send + Sync + 'static,
    E: Clone + PartialEq + Send + Sync + 'static,
{
    let next = PromiseReducer::<T, E>::reduce(state.clone(), intent);
    if next == *state {
        return false;
    }
    *state = next;
    true
}
