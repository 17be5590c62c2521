use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a group of hits came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitSource {
    Lexicon,
    Analyzer,
}

/// One category of pattern hits for a run, flattened for the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternHitRecord {
    pub hit_id: String,
    pub run_id: String,
    pub category: String,
    pub source: HitSource,
    pub hit_count: usize,
    /// Matched substrings joined by "; ".
    pub hits: String,
}

impl PatternHitRecord {
    pub fn new(run_id: &str, category: &str, source: HitSource, hits: &[String]) -> Self {
        Self {
            hit_id: Uuid::new_v4().to_string(),
            run_id: run_id.to_string(),
            category: category.to_string(),
            source,
            hit_count: hits.len(),
            hits: hits.join("; "),
        }
    }
}
