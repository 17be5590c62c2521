use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A correctness grade for one run, manual or automatic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub evaluation_id: String,
    pub run_id: String,
    pub grader_id: String,
    /// 1 for correct, 0 otherwise.
    pub correctness_score: u8,
    /// Judger aggregate, when a judger graded the run.
    pub aggregate_score: Option<f64>,
    pub evaluation_notes: String,
    pub evaluated_at: DateTime<Utc>,
}

impl Evaluation {
    pub fn new(run_id: &str, grader_id: &str, correct: bool, notes: &str) -> Self {
        Self {
            evaluation_id: Uuid::new_v4().to_string(),
            run_id: run_id.to_string(),
            grader_id: grader_id.to_string(),
            correctness_score: u8::from(correct),
            aggregate_score: None,
            evaluation_notes: notes.to_string(),
            evaluated_at: Utc::now(),
        }
    }

    pub fn with_aggregate(mut self, score: f64) -> Self {
        self.aggregate_score = Some(score);
        self
    }
}
