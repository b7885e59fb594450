use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    pub on: bool,
}

impl UiState for ToggleState {}

impl ToggleState {
    pub fn new(on: bool) -> Self {
        Self { on }
    }
}
