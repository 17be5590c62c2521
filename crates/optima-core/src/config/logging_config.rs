//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Levels accepted by `LoggingConfig::level`.
pub const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset. Default: "info".
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output. Default: false.
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(false)
    }
}
