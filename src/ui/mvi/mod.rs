//! Model-View-Intent (MVI) primitives shared by every state utility.
//!
//! ```text
//! caller ──→ Intent ──→ Reducer ──→ State ──→ observer
//!   ↑                                            │
//!   └────────────────────────────────────────────┘
//! ```
//!
//! - **State**: value snapshot handed to whatever renders it
//! - **Intent**: something that happened (a call started, a result arrived)
//! - **Reducer**: pure `(State, Intent) -> State` transition

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
