//! Batch orchestrator configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Source table holding the problem bank. Default: "problems".
    pub source_table: Option<String>,
    /// Run-buffer size that triggers a flush. Default: 20.
    pub flush_every: Option<usize>,
    /// Pause between cells in milliseconds. Default: 150.
    pub throttle_ms: Option<u64>,
    /// Prepend the fixed baseline prompt to every problem. Default: true.
    pub include_baseline: Option<bool>,
    /// Solver samples per cell; 0 disables consistency scoring. Default: 0.
    pub consistency_samples: Option<usize>,
    /// Allow one stricter analyzer call before the heuristic fallback. Default: true.
    pub strict_retry: Option<bool>,
    /// Content-domain filter (canonical CCSS codes). Empty matches all.
    #[serde(default)]
    pub content_domains: Vec<String>,
    /// Cognitive-level filter. Empty matches all.
    #[serde(default)]
    pub cognitive_levels: Vec<u8>,
    /// Context filter ("abstract", "real-world", ...). Empty matches all.
    #[serde(default)]
    pub contexts: Vec<String>,
    /// Personas used by the prompt synthesizer. Empty means no persona.
    #[serde(default)]
    pub personas: Vec<String>,
    pub analyzer_model: Option<String>,
    pub solver_model: Option<String>,
    /// User id stamped on batch records. Default: "AI User".
    pub batch_user_id: Option<String>,
}

impl BatchConfig {
    pub fn effective_source_table(&self) -> &str {
        self.source_table
            .as_deref()
            .unwrap_or(constants::DEFAULT_SOURCE_TABLE)
    }

    pub fn effective_flush_every(&self) -> usize {
        self.flush_every.unwrap_or(constants::DEFAULT_FLUSH_EVERY)
    }

    pub fn effective_throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms.unwrap_or(constants::DEFAULT_THROTTLE_MS))
    }

    pub fn effective_include_baseline(&self) -> bool {
        self.include_baseline.unwrap_or(true)
    }

    pub fn effective_consistency_samples(&self) -> usize {
        self.consistency_samples.unwrap_or(0)
    }

    /// Consistency scoring needs at least three samples.
    pub fn consistency_enabled(&self) -> bool {
        self.effective_consistency_samples() >= 3
    }

    pub fn effective_strict_retry(&self) -> bool {
        self.strict_retry.unwrap_or(true)
    }

    pub fn effective_analyzer_model(&self) -> &str {
        self.analyzer_model
            .as_deref()
            .unwrap_or(constants::DEFAULT_ANALYZER_MODEL)
    }

    pub fn effective_solver_model(&self) -> &str {
        self.solver_model
            .as_deref()
            .unwrap_or(constants::DEFAULT_SOLVER_MODEL)
    }

    pub fn effective_batch_user_id(&self) -> &str {
        self.batch_user_id
            .as_deref()
            .unwrap_or(constants::DEFAULT_BATCH_USER)
    }
}
