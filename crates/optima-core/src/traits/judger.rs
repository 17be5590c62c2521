use crate::errors::CollaboratorError;
use crate::models::Judgement;

/// External grader used by consistency-aware batches.
pub trait IJudger: Send + Sync {
    fn judge(
        &self,
        problem_text: &str,
        prompt_text: &str,
        solution_text: &str,
    ) -> Result<Judgement, CollaboratorError>;

    /// Grader id recorded on evaluations.
    fn grader_id(&self) -> &str;
}
