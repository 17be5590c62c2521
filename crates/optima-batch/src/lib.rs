//! # optima-batch
//!
//! Runs the prompt experiment: selects problems from the source table,
//! expands each into taxonomy prompt variants, drives every cell through
//! analyzer, solver and scorers, and appends the records in buffered
//! batches. Also hosts the single-prompt submission path.

pub mod analysis;
pub mod buffer;
pub mod cell;
pub mod events;
pub mod orchestrator;
pub mod selection;
pub mod submission;
pub mod taxonomy;
pub mod tracing_setup;
pub mod variants;

pub use cell::{CellState, ExperimentCell};
pub use events::{BatchEventHandler, EventDispatcher};
pub use orchestrator::{BatchOrchestrator, BatchSummary, Collaborators};
pub use submission::{SubmissionOutcome, SubmissionService};
