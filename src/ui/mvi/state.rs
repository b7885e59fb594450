//! Marker trait for observable state.

/// Marker trait for state snapshots.
///
/// `PartialEq` lets observers skip notifications when a transition
/// produced an identical value.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
