use serde::{Deserialize, Serialize};

use crate::identity::{clean_problem_text, generate_problem_id};

/// A problem selected from the source table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemRecord {
    pub problem_id: String,
    pub problem_text: String,
    /// Canonical CCSS code, e.g. "6.rp.a.3".
    pub content_domain: String,
    pub cognitive_level: String,
    /// "abstract", "real-world", ...
    pub problem_context: String,
}

impl ProblemRecord {
    pub fn new(text: &str, content_domain: &str, cognitive_level: &str, context: &str) -> Self {
        let problem_text = clean_problem_text(text).to_string();
        Self {
            problem_id: generate_problem_id(&problem_text),
            problem_text,
            content_domain: content_domain.to_string(),
            cognitive_level: cognitive_level.to_string(),
            problem_context: context.to_string(),
        }
    }
}
