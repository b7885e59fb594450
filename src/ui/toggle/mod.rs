//! Boolean on/off state (switches, disclosure panels, checkboxes).

mod intent;
mod reducer;
mod state;

pub use intent::ToggleIntent;
pub use reducer::ToggleReducer;
pub use state::ToggleState;
