use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AnalysisSource;

/// One experiment cell's outcome: prompt, solution, analyzer view and composites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub run_id: String,
    pub session_id: String,
    pub user_id: String,

    pub problem_id: String,
    pub problem_text: String,
    pub content_domain: String,
    pub cognitive_level: String,
    pub problem_context: String,

    pub prompt_text: String,
    pub prompt_level: u8,
    pub prompt_name: String,
    pub persona: Option<String>,

    pub solver_model_name: String,
    pub response_text: String,

    pub clarity_score: u8,
    pub specificity_score: u8,
    pub structure_score: u8,
    pub estimated_token_count: Option<u32>,
    pub estimated_mattr_score: Option<f64>,
    pub estimated_reading_ease: Option<f64>,
    pub analysis_rationale: String,
    pub analysis_source: AnalysisSource,

    pub cdi_composite: f64,
    pub sss_weighted: f64,
    pub arq_score: f64,
    pub consistency_score: Option<f64>,

    pub latency_ms: u64,
    pub tokens_in: u32,
    pub tokens_out: u32,
    pub created_at: DateTime<Utc>,
}
