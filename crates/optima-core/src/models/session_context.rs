//! Explicit per-session identity, passed into every handler.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which identity fields survive `SessionContext::renew`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityKeep {
    pub session_id: bool,
    pub user_id: bool,
    pub evaluator_name: bool,
}

impl IdentityKeep {
    pub const NONE: Self = Self {
        session_id: false,
        user_id: false,
        evaluator_name: false,
    };

    /// A fresh session for the same person.
    pub const USER: Self = Self {
        session_id: false,
        user_id: true,
        evaluator_name: true,
    };

    pub const ALL: Self = Self {
        session_id: true,
        user_id: true,
        evaluator_name: true,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: String,
    pub user_id: String,
    pub evaluator_name: Option<String>,
    pub started_at: DateTime<Utc>,
    /// Names of taxonomy prompts already suggested in this session.
    pub shown_suggestions: BTreeSet<String>,
}

impl SessionContext {
    pub fn new(user_id: &str) -> Self {
        Self {
            session_id: short_session_id(),
            user_id: user_id.to_string(),
            evaluator_name: None,
            started_at: Utc::now(),
            shown_suggestions: BTreeSet::new(),
        }
    }

    pub fn with_evaluator(mut self, name: &str) -> Self {
        self.evaluator_name = Some(name.to_string());
        self
    }

    /// Start a new session, carrying over the identity fields selected by `keep`.
    /// Suggestion history never carries over.
    pub fn renew(&self, keep: IdentityKeep) -> Self {
        Self {
            session_id: if keep.session_id {
                self.session_id.clone()
            } else {
                short_session_id()
            },
            user_id: if keep.user_id {
                self.user_id.clone()
            } else {
                Uuid::new_v4().to_string()
            },
            evaluator_name: if keep.evaluator_name {
                self.evaluator_name.clone()
            } else {
                None
            },
            started_at: Utc::now(),
            shown_suggestions: BTreeSet::new(),
        }
    }

    pub fn has_seen(&self, suggestion_name: &str) -> bool {
        self.shown_suggestions.contains(suggestion_name)
    }

    pub fn mark_shown(&mut self, suggestion_name: &str) {
        self.shown_suggestions.insert(suggestion_name.to_string());
    }
}

/// Eight-character session id.
fn short_session_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renew_keeps_only_selected_identity() {
        let mut session = SessionContext::new("u-1").with_evaluator("Ana");
        session.mark_shown("Zero-shot");

        let fresh = session.renew(IdentityKeep::USER);
        assert_ne!(fresh.session_id, session.session_id);
        assert_eq!(fresh.user_id, "u-1");
        assert_eq!(fresh.evaluator_name.as_deref(), Some("Ana"));
        assert!(fresh.shown_suggestions.is_empty());

        let anonymous = session.renew(IdentityKeep::NONE);
        assert_ne!(anonymous.user_id, "u-1");
        assert!(anonymous.evaluator_name.is_none());

        let same = session.renew(IdentityKeep::ALL);
        assert_eq!(same.session_id, session.session_id);
    }

    #[test]
    fn session_ids_are_short() {
        assert_eq!(SessionContext::new("u").session_id.len(), 8);
    }
}
