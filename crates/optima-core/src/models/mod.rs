//! Record types persisted by the batch pipeline and the submission path.

pub mod advanced_metrics;
pub mod analysis;
pub mod collaborator_io;
pub mod evaluation;
mod lenient;
pub mod pattern_hit_record;
pub mod pattern_hits;
pub mod problem;
pub mod prompt_metrics;
pub mod prompt_template;
pub mod run;
pub mod session_context;
pub mod suggestion;

pub use advanced_metrics::AdvancedMetricsRecord;
pub use analysis::{
    AnalysisSource, EstimatedMetrics, PromptAnalysis, QualitativeScores, QualityBand,
};
pub use collaborator_io::{AnalysisMode, Judgement, Solution};
pub use evaluation::Evaluation;
pub use pattern_hit_record::{HitSource, PatternHitRecord};
pub use pattern_hits::PatternHits;
pub use problem::ProblemRecord;
pub use prompt_metrics::PromptMetrics;
pub use prompt_template::PromptTemplate;
pub use run::Run;
pub use session_context::{IdentityKeep, SessionContext};
pub use suggestion::Suggestion;
