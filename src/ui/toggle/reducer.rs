use crate::ui::mvi::Reducer;
use crate::ui::toggle::intent::ToggleIntent;
use crate::ui::toggle::state::ToggleState;

pub struct ToggleReducer;

impl Reducer for ToggleReducer {
    type State = ToggleState;
    type Intent = ToggleIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToggleIntent::Toggle => ToggleState { on: !state.on },
            ToggleIntent::Set { on } => ToggleState { on },
        }
    }
}
