//! Values exchanged with external collaborators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Instruction strength for an analyzer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Standard,
    /// Repeat the request demanding bare JSON output.
    Strict,
}

/// Solver output for one prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub solution_text: String,
    pub tokens_in: u32,
    pub tokens_out: u32,
    pub latency_ms: u64,
}

/// Judger verdict for one solution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Judgement {
    pub narrative: String,
    pub component_scores: BTreeMap<String, f64>,
    /// Aggregate in 0..=1; 0.5 and above counts as correct.
    pub aggregate_score: f64,
}

impl Judgement {
    pub fn is_correct(&self) -> bool {
        self.aggregate_score >= 0.5
    }
}
