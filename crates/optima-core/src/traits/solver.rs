use crate::errors::CollaboratorError;
use crate::models::Solution;

/// External problem solver. Never retried.
///
/// `model` is the configured solver model; runs record the same name.
pub trait ISolver: Send + Sync {
    fn solve(
        &self,
        prompt_text: &str,
        problem_text: &str,
        model: &str,
    ) -> Result<Solution, CollaboratorError>;
}
