//! # optima-core
//!
//! Foundation crate for the PromptOptima scoring system.
//! Defines all record types, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod identity;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OptimaConfig;
pub use errors::{OptimaError, OptimaResult};
pub use identity::generate_problem_id;
pub use models::{
    AdvancedMetricsRecord, Evaluation, PatternHits, ProblemRecord, PromptMetrics, Run,
    SessionContext, Suggestion,
};
