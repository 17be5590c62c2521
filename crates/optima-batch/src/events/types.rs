//! Event payloads.

use crate::orchestrator::BatchSummary;

#[derive(Debug, Clone)]
pub struct BatchStartedEvent {
    pub selected: usize,
    pub total_cells: usize,
}

/// Emitted after every cell, successful or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressEvent {
    pub done: usize,
    pub total: usize,
}

#[derive(Debug, Clone)]
pub struct CellCompletedEvent {
    pub run_id: String,
    pub problem_id: String,
    pub prompt_name: String,
}

#[derive(Debug, Clone)]
pub struct CellFailedEvent {
    pub run_id: String,
    pub problem_id: String,
    pub prompt_name: String,
    /// State the cell was in when it failed.
    pub stage: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
pub struct FlushEvent {
    pub runs: usize,
    pub errors: usize,
}

#[derive(Debug, Clone)]
pub struct BatchCompleteEvent {
    pub summary: BatchSummary,
}
