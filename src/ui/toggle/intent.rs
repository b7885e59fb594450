use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIntent {
    /// Flip the current value.
    Toggle,
    /// Force a value.
    Set { on: bool },
}

impl Intent for ToggleIntent {}
