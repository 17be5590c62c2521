//! Fixture loader and scripted collaborators for PromptOptima tests.
//!
//! JSON fixtures live under `data/` in this crate. The fakes in [`fakes`]
//! stand in for the analyzer, solver, synthesizer, judger and store.

pub mod fakes;
pub mod records;

use std::path::PathBuf;

use optima_core::traits::SourceRow;
use serde::de::DeserializeOwned;

fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw text.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// The sample problem bank: five rows across three CCSS domains.
pub fn problem_bank() -> Vec<SourceRow> {
    load_fixture("problems.json")
}

/// A well-formed analyzer response wrapped in prose and a code fence.
pub fn analyzer_response() -> String {
    load_fixture_text("analyzer_response.txt")
}
