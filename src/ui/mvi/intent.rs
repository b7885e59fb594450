//! Marker trait for intents.

/// Marker trait for intent objects.
///
/// An intent describes an event the state utility must react to: a caller
/// action (reset, toggle) or an async completion carrying its invocation id.
pub trait Intent: Send + 'static {}
