//! Top-level PromptOptima configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::logging_config::KNOWN_LEVELS;
use super::{BatchConfig, LoggingConfig, MetricsConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "optima.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`OPTIMA_*`)
/// 3. Project config (`optima.toml` in project root)
/// 4. User config (`~/.optima/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OptimaConfig {
    pub metrics: MetricsConfig,
    pub scoring: ScoringConfig,
    pub batch: BatchConfig,
    pub logging: LoggingConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub window_size: Option<usize>,
    pub flush_every: Option<usize>,
    pub throttle_ms: Option<u64>,
    pub solver_model: Option<String>,
    pub log_level: Option<String>,
}

impl OptimaConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    // An unreadable user config falls back to defaults.
                    Err(_) => {}
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &OptimaConfig) -> Result<(), ConfigError> {
        fn invalid(field: &str, message: &str) -> ConfigError {
            ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            }
        }

        if config.metrics.window_size == Some(0) {
            return Err(invalid("metrics.window_size", "must be greater than 0"));
        }
        if config.metrics.long_word_len == Some(0) {
            return Err(invalid("metrics.long_word_len", "must be greater than 0"));
        }
        if let Some(slope) = config.metrics.ease_slope {
            if !slope.is_finite() || slope <= 0.0 {
                return Err(invalid("metrics.ease_slope", "must be a positive number"));
            }
        }
        if let Some(smoothing) = config.scoring.arq_smoothing {
            if !smoothing.is_finite() || smoothing <= 0.0 {
                return Err(invalid("scoring.arq_smoothing", "must be a positive number"));
            }
        }
        if config.batch.flush_every == Some(0) {
            return Err(invalid("batch.flush_every", "must be greater than 0"));
        }
        if let Some(samples) = config.batch.consistency_samples {
            if samples > 0 && samples < 3 {
                return Err(invalid(
                    "batch.consistency_samples",
                    "must be 0 (disabled) or at least 3",
                ));
            }
        }
        if config
            .batch
            .cognitive_levels
            .iter()
            .any(|level| !(1..=5).contains(level))
        {
            return Err(invalid("batch.cognitive_levels", "levels must be between 1 and 5"));
        }
        if let Some(ref level) = config.logging.level {
            if !KNOWN_LEVELS.contains(&level.to_lowercase().as_str()) {
                return Err(invalid(
                    "logging.level",
                    "must be one of trace, debug, info, warn, error",
                ));
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.optima/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut OptimaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: OptimaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `Some` values and non-empty lists win.
    fn merge(base: &mut OptimaConfig, other: &OptimaConfig) {
        fn take<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
            if other.is_some() {
                *base = other.clone();
            }
        }
        fn take_list<T: Clone>(base: &mut Vec<T>, other: &[T]) {
            if !other.is_empty() {
                *base = other.to_vec();
            }
        }

        // Metrics
        take(&mut base.metrics.window_size, &other.metrics.window_size);
        take(&mut base.metrics.long_word_len, &other.metrics.long_word_len);
        take(&mut base.metrics.ease_anchor, &other.metrics.ease_anchor);
        take(&mut base.metrics.ease_slope, &other.metrics.ease_slope);

        // Scoring
        take(&mut base.scoring.arq_meta_min, &other.scoring.arq_meta_min);
        take(
            &mut base.scoring.arq_logic_modal_min,
            &other.scoring.arq_logic_modal_min,
        );
        take(&mut base.scoring.arq_smoothing, &other.scoring.arq_smoothing);
        take(&mut base.scoring.enrichment, &other.scoring.enrichment);

        // Batch
        take(&mut base.batch.source_table, &other.batch.source_table);
        take(&mut base.batch.flush_every, &other.batch.flush_every);
        take(&mut base.batch.throttle_ms, &other.batch.throttle_ms);
        take(&mut base.batch.include_baseline, &other.batch.include_baseline);
        take(
            &mut base.batch.consistency_samples,
            &other.batch.consistency_samples,
        );
        take(&mut base.batch.strict_retry, &other.batch.strict_retry);
        take_list(&mut base.batch.content_domains, &other.batch.content_domains);
        take_list(&mut base.batch.cognitive_levels, &other.batch.cognitive_levels);
        take_list(&mut base.batch.contexts, &other.batch.contexts);
        take_list(&mut base.batch.personas, &other.batch.personas);
        take(&mut base.batch.analyzer_model, &other.batch.analyzer_model);
        take(&mut base.batch.solver_model, &other.batch.solver_model);
        take(&mut base.batch.batch_user_id, &other.batch.batch_user_id);

        // Logging
        take(&mut base.logging.level, &other.logging.level);
        take(&mut base.logging.json, &other.logging.json);
    }

    /// Apply environment variable overrides.
    /// Pattern: `OPTIMA_METRICS_WINDOW_SIZE`, `OPTIMA_BATCH_FLUSH_EVERY`, etc.
    fn apply_env_overrides(config: &mut OptimaConfig) {
        fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
            std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
        }

        if let Some(v) = parsed::<usize>("OPTIMA_METRICS_WINDOW_SIZE") {
            config.metrics.window_size = Some(v);
        }
        if let Some(v) = parsed::<usize>("OPTIMA_BATCH_FLUSH_EVERY") {
            config.batch.flush_every = Some(v);
        }
        if let Some(v) = parsed::<u64>("OPTIMA_BATCH_THROTTLE_MS") {
            config.batch.throttle_ms = Some(v);
        }
        if let Some(v) = parsed::<usize>("OPTIMA_BATCH_CONSISTENCY_SAMPLES") {
            config.batch.consistency_samples = Some(v);
        }
        if let Some(v) = parsed::<bool>("OPTIMA_BATCH_INCLUDE_BASELINE") {
            config.batch.include_baseline = Some(v);
        }
        if let Ok(val) = std::env::var("OPTIMA_BATCH_SOURCE_TABLE") {
            config.batch.source_table = Some(val);
        }
        if let Ok(val) = std::env::var("OPTIMA_BATCH_SOLVER_MODEL") {
            config.batch.solver_model = Some(val);
        }
        if let Ok(val) = std::env::var("OPTIMA_BATCH_ANALYZER_MODEL") {
            config.batch.analyzer_model = Some(val);
        }
        if let Ok(val) = std::env::var("OPTIMA_LOG_LEVEL") {
            config.logging.level = Some(val);
        }
        if let Some(v) = parsed::<bool>("OPTIMA_LOG_JSON") {
            config.logging.json = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut OptimaConfig, cli: &CliOverrides) {
        if let Some(v) = cli.window_size {
            config.metrics.window_size = Some(v);
        }
        if let Some(v) = cli.flush_every {
            config.batch.flush_every = Some(v);
        }
        if let Some(v) = cli.throttle_ms {
            config.batch.throttle_ms = Some(v);
        }
        if let Some(ref v) = cli.solver_model {
            config.batch.solver_model = Some(v.clone());
        }
        if let Some(ref v) = cli.log_level {
            config.logging.level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.optima/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".optima"))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
