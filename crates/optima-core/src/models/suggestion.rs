use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A taxonomy prompt suggested to (or used by) a user for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggestion_id: String,
    pub session_id: String,
    pub user_id: String,
    pub run_id: String,
    pub suggestion_key: u16,
    pub suggestion_name: String,
    pub suggested_level: u8,
    pub shown_at: DateTime<Utc>,
    pub accepted: bool,
}

impl Suggestion {
    pub fn new(
        session_id: &str,
        user_id: &str,
        run_id: &str,
        key: u16,
        name: &str,
        level: u8,
        accepted: bool,
    ) -> Self {
        Self {
            suggestion_id: Uuid::new_v4().to_string(),
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
            run_id: run_id.to_string(),
            suggestion_key: key,
            suggestion_name: name.to_string(),
            suggested_level: level,
            shown_at: Utc::now(),
            accepted,
        }
    }
}
