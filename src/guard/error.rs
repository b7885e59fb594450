//! Error types for guard usage.

use thiserror::Error;

/// Misuse of a guard. Operation failures are never wrapped in this type;
/// they reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// `retry` needs a previous call whose failure is still in state.
    #[error("Invalid retry: no failed call to retry yet")]
    InvalidRetry,
}
