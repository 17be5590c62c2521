use crate::errors::CollaboratorError;
use crate::models::PromptTemplate;

/// Rewrites a taxonomy template into a concrete prompt for one problem.
pub trait IPromptSynthesizer: Send + Sync {
    fn synthesize(
        &self,
        problem_text: &str,
        entry: &PromptTemplate,
        persona: Option<&str>,
        cognitive_level: &str,
    ) -> Result<String, CollaboratorError>;
}
