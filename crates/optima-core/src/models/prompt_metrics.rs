use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deterministic metrics for one prompt.
///
/// `token_count == 0` implies `mattr == 0` and `reading_ease == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMetrics {
    pub metric_id: String,
    pub run_id: String,
    pub tokenizer: String,
    pub window_w: usize,
    /// Moving-average type-token ratio in [0, 1].
    pub mattr: f64,
    pub token_count: usize,
    /// LIX mapped to a 0..=100 ease scale.
    pub reading_ease: f64,
    /// Raw LIX index.
    pub reading_lix: f64,
    pub computed_at: DateTime<Utc>,
}
