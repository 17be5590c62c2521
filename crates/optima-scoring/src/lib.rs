//! # optima-scoring
//!
//! Heuristic composite scores for teaching prompts:
//! Cognitive Demand Index (CDI), Structured Scaffolding Score (SSS) and
//! Abstract Reasoning Quotient (ARQ), built from versioned lexicons and
//! regex pattern families. Analyzer pattern hits can be merged into the
//! counted text ("enrichment"). Also hosts the answer-consistency scorer.

pub mod advanced;
pub mod arq;
pub mod cdi;
pub mod consistency;
pub mod enrichment;
pub mod lexicon;
pub mod patterns;
pub mod sss;

pub use advanced::{AdvancedMetrics, AdvancedScorer, ScoringParams};
pub use arq::{ArqParams, ArqScore};
pub use cdi::CdiScore;
pub use consistency::{extract_final_answer, ConsistencyReport};
pub use lexicon::{Lexicon, TermSet, LEXICON_VERSION};
pub use sss::SssScore;
