//! File-backed configuration for logging and scenario replay.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, SimulationConfig};
