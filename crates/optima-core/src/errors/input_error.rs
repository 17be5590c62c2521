//! Input errors, raised before any collaborator is called.

use super::error_code::{self, OptimaErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("problem text is empty")]
    BlankProblem,

    #[error("prompt text is empty")]
    BlankPrompt,

    #[error("source table {table} is missing columns: {}", missing.join(", "))]
    MissingColumns { table: String, missing: Vec<String> },

    #[error("source table {table} has no rows")]
    EmptySource { table: String },
}

impl InputError {
    /// Reject blank problem or prompt text.
    pub fn check_texts(problem_text: &str, prompt_text: &str) -> Result<(), InputError> {
        if problem_text.trim().is_empty() {
            return Err(InputError::BlankProblem);
        }
        if prompt_text.trim().is_empty() {
            return Err(InputError::BlankPrompt);
        }
        Ok(())
    }
}

impl OptimaErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
