//! Reducer for promise state.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::PromiseIntent;
use super::state::PromiseState;

/// Transitions for [`PromiseState`].
///
/// Completions carry the id of the invocation that produced them and are
/// dropped unless that id is still the latest one started.
pub struct PromiseReducer<T, E>(PhantomData<fn() -> (T, E)>);

impl<T, E> Reducer for PromiseReducer<T, E>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    E: Clone + PartialEq + Send + Sync + 'static,
{
    type State = PromiseState<T, E>;
    type Intent = PromiseIntent<T, E>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PromiseIntent::Start { invocation } => {
                state.set_latest_invocation(invocation);
                state.loading = true;
                state.error = None;
                state
            }

            PromiseIntent::Resolve { invocation, value } => {
                if state.is_current(invocation) {
                    state.value = Some(value);
                    state.loading = false;
                }
                state
            }

            PromiseIntent::Reject { invocation, error } => {
                if state.is_current(invocation) {
                    state.error = Some(error);
                    state.loading = false;
                }
                state
            }

            PromiseIntent::Reset => {
                state.loading = false;
                state.value = None;
                state.error = None;
                state
            }

            PromiseIntent::SetValue { value } => {
                state.value = Some(value);
                state
            }
        }
    }
}
