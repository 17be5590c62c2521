use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flattened CDI/SSS/ARQ snapshot keyed by `run_id`.
///
/// Field names are a stable contract for downstream tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvancedMetricsRecord {
    pub run_id: String,
    pub session_id: String,
    pub user_id: String,
    pub prompt_text: String,
    pub lexicon_version: String,

    pub cdi_rate_cognitive_verbs: f64,
    pub cdi_lexical_density: f64,
    pub cdi_clauses_per_sentence: f64,
    pub cdi_rate_abstract_terms: f64,
    pub cdi_composite: f64,

    pub sss_n_examples: usize,
    pub sss_n_step_markers: usize,
    pub sss_n_formula_markers: usize,
    pub sss_n_hints: usize,
    pub sss_raw: usize,
    pub sss_weighted: f64,

    pub arq_abstract_terms: usize,
    pub arq_numbers: usize,
    pub arq_ratio: f64,
    pub arq_meta_bonus: f64,
    pub arq_score: f64,

    pub computed_at: DateTime<Utc>,
}
