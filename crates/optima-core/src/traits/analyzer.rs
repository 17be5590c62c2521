use crate::errors::CollaboratorError;
use crate::models::AnalysisMode;

/// External prompt analyzer.
///
/// Returns the raw response text; callers extract the JSON object from it.
pub trait IAnalyzer: Send + Sync {
    fn analyze(
        &self,
        prompt_text: &str,
        problem_text: &str,
        model: &str,
        mode: AnalysisMode,
    ) -> Result<String, CollaboratorError>;
}
