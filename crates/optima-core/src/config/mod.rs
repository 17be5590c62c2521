//! Configuration system for PromptOptima.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod batch_config;
pub mod logging_config;
pub mod metrics_config;
pub mod optima_config;
pub mod scoring_config;

pub use batch_config::BatchConfig;
pub use logging_config::LoggingConfig;
pub use metrics_config::MetricsConfig;
pub use optima_config::{CliOverrides, OptimaConfig};
pub use scoring_config::ScoringConfig;
