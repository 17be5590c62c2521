//! Tests for the PromptOptima configuration system.

use std::sync::Mutex;

use optima_core::config::{CliOverrides, OptimaConfig};
use optima_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: [&str; 10] = [
    "OPTIMA_METRICS_WINDOW_SIZE",
    "OPTIMA_BATCH_FLUSH_EVERY",
    "OPTIMA_BATCH_THROTTLE_MS",
    "OPTIMA_BATCH_CONSISTENCY_SAMPLES",
    "OPTIMA_BATCH_INCLUDE_BASELINE",
    "OPTIMA_BATCH_SOURCE_TABLE",
    "OPTIMA_BATCH_SOLVER_MODEL",
    "OPTIMA_BATCH_ANALYZER_MODEL",
    "OPTIMA_LOG_LEVEL",
    "OPTIMA_LOG_JSON",
];

fn clear_optima_env_vars() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

/// Points HOME at `home` so the user layer is isolated from the machine.
fn isolate_home(home: &std::path::Path) {
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_optima_env_vars();

    let home = tempfile::TempDir::new().unwrap();
    isolate_home(home.path());
    std::fs::create_dir_all(home.path().join(".optima")).unwrap();
    std::fs::write(
        home.path().join(".optima/config.toml"),
        r#"
[metrics]
window_size = 8
long_word_len = 6

[batch]
throttle_ms = 10
"#,
    )
    .unwrap();

    let project = tempfile::TempDir::new().unwrap();
    std::fs::write(
        project.path().join("optima.toml"),
        r#"
[metrics]
window_size = 12

[batch]
flush_every = 5
throttle_ms = 40
"#,
    )
    .unwrap();

    std::env::set_var("OPTIMA_BATCH_FLUSH_EVERY", "7");

    let cli = CliOverrides {
        throttle_ms: Some(0),
        ..Default::default()
    };
    let config = OptimaConfig::load(project.path(), Some(&cli)).unwrap();

    // user layer survives where nothing overrides it
    assert_eq!(config.metrics.effective_long_word_len(), 6);
    // project beats user
    assert_eq!(config.metrics.effective_window_size(), 12);
    // env beats project
    assert_eq!(config.batch.effective_flush_every(), 7);
    // CLI beats everything
    assert_eq!(config.batch.throttle_ms, Some(0));

    clear_optima_env_vars();
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_optima_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    isolate_home(dir.path());
    let config = OptimaConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.metrics.effective_window_size(), 10);
    assert_eq!(config.metrics.effective_long_word_len(), 7);
    assert_eq!(config.batch.effective_flush_every(), 20);
    assert_eq!(config.batch.effective_throttle().as_millis(), 150);
    assert_eq!(config.batch.effective_source_table(), "problems");
    assert!(config.batch.effective_include_baseline());
    assert!(!config.batch.consistency_enabled());
    assert_eq!(config.scoring.effective_arq_smoothing(), 1.0);
    assert_eq!(config.logging.effective_level(), "info");
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_optima_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    isolate_home(dir.path());
    std::fs::write(dir.path().join("optima.toml"), "[batch\nflush_every = ").unwrap();

    let err = OptimaConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "got {err:?}");
}

#[test]
fn test_invalid_values() {
    let cases = [
        ("[metrics]\nwindow_size = 0", "metrics.window_size"),
        ("[batch]\nflush_every = 0", "batch.flush_every"),
        ("[batch]\nconsistency_samples = 2", "batch.consistency_samples"),
        ("[batch]\ncognitive_levels = [1, 9]", "batch.cognitive_levels"),
        ("[logging]\nlevel = \"loud\"", "logging.level"),
        ("[scoring]\narq_smoothing = 0.0", "scoring.arq_smoothing"),
    ];
    for (toml, expected_field) in cases {
        let config = OptimaConfig::from_toml(toml).unwrap();
        match OptimaConfig::validate(&config) {
            Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("{toml}: expected validation failure, got {other:?}"),
        }
    }
}

#[test]
fn test_unrecognized_keys_accepted() {
    let config = OptimaConfig::from_toml(
        r#"
[batch]
flush_every = 3
future_option = "yes"

[dashboard]
enabled = true
"#,
    )
    .unwrap();
    assert_eq!(config.batch.effective_flush_every(), 3);
}

#[test]
fn test_config_round_trip() {
    let config = OptimaConfig::from_toml(
        r#"
[batch]
personas = ["coach", "peer"]
content_domains = ["6.rp.a.3"]
consistency_samples = 3
"#,
    )
    .unwrap();
    let toml = config.to_toml().unwrap();
    let back = OptimaConfig::from_toml(&toml).unwrap();
    assert_eq!(back.batch.personas, vec!["coach", "peer"]);
    assert_eq!(back.batch.content_domains, vec!["6.rp.a.3"]);
    assert!(back.batch.consistency_enabled());
}

#[test]
fn test_env_bool_and_string_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_optima_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    isolate_home(dir.path());
    std::env::set_var("OPTIMA_BATCH_INCLUDE_BASELINE", "false");
    std::env::set_var("OPTIMA_BATCH_SOURCE_TABLE", "bank");
    std::env::set_var("OPTIMA_BATCH_THROTTLE_MS", "not-a-number");

    let config = OptimaConfig::load(dir.path(), None).unwrap();
    assert!(!config.batch.effective_include_baseline());
    assert_eq!(config.batch.effective_source_table(), "bank");
    // unparseable values are ignored
    assert_eq!(config.batch.throttle_ms, None);

    clear_optima_env_vars();
}
