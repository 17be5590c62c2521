//! Tracing setup: `EnvFilter` plus fmt output, optionally JSON.

pub mod spans;

use optima_core::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides `logging.level`.
pub const LOG_ENV: &str = "RUST_LOG";

/// Filter from `RUST_LOG`, falling back to the configured level.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.effective_level()))
}

/// Install the global subscriber.
///
/// Idempotent: returns false when a subscriber was already installed.
pub fn init(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);
    let installed = if config.effective_json() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
