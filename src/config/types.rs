use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Settings for the tracing subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Colored output on stderr (default: true). File output never uses ANSI.
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

/// Settings for scenario replay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Operation latency for `call` steps that omit `delay_ms` (default: 50).
    #[serde(default = "default_delay_ms")]
    pub default_delay_ms: u64,
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}

fn default_delay_ms() -> u64 {
    50
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: default_ansi(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: default_delay_ms(),
        }
    }
}
