//! Seams between the core and its collaborators.

pub mod analyzer;
pub mod judger;
pub mod record_store;
pub mod solver;
pub mod source_table;
pub mod synthesizer;
pub mod to_row;
pub mod tokenizer;

pub use analyzer::IAnalyzer;
pub use judger::IJudger;
pub use record_store::IRecordStore;
pub use solver::ISolver;
pub use source_table::{ISourceTable, SourceRow};
pub use synthesizer::IPromptSynthesizer;
pub use to_row::{Row, ToRow};
pub use tokenizer::Tokenizer;
