//! Heuristic composite scoring configuration.
//!
//! The CDI/SSS/ARQ weights are tunable; the defaults reproduce lexicon
//! version 2.1 exactly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Metacognitive matches that open the ARQ gate on their own. Default: 1.
    pub arq_meta_min: Option<usize>,
    /// Logic connectors plus modals that open the ARQ gate. Default: 2.
    pub arq_logic_modal_min: Option<usize>,
    /// Added to the ARQ denominator. Default: 1.0.
    pub arq_smoothing: Option<f64>,
    /// Merge analyzer pattern hits into the counted text. Default: true.
    pub enrichment: Option<bool>,
}

impl ScoringConfig {
    pub fn effective_arq_meta_min(&self) -> usize {
        self.arq_meta_min.unwrap_or(1)
    }

    pub fn effective_arq_logic_modal_min(&self) -> usize {
        self.arq_logic_modal_min.unwrap_or(2)
    }

    pub fn effective_arq_smoothing(&self) -> f64 {
        self.arq_smoothing.unwrap_or(1.0)
    }

    pub fn effective_enrichment(&self) -> bool {
        self.enrichment.unwrap_or(true)
    }
}
