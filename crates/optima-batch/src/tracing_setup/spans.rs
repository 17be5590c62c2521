//! Span definitions for batch work.

/// Span covering one batch run.
#[macro_export]
macro_rules! batch_span {
    ($source_table:expr, $flush_every:expr) => {
        tracing::info_span!("optima.batch", source_table = %$source_table, flush_every = $flush_every)
    };
}

/// Span covering one experiment cell.
#[macro_export]
macro_rules! cell_span {
    ($run_id:expr, $prompt_name:expr) => {
        tracing::debug_span!("optima.cell", run_id = %$run_id, prompt = %$prompt_name)
    };
}

/// Span covering one buffer flush.
#[macro_export]
macro_rules! flush_span {
    ($runs:expr) => {
        tracing::info_span!("optima.flush", runs = $runs)
    };
}

/// Span covering one interactive submission.
#[macro_export]
macro_rules! submission_span {
    ($session_id:expr, $problem_id:expr) => {
        tracing::info_span!("optima.submission", session_id = %$session_id, problem_id = %$problem_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const BATCH: &str = "optima.batch";
    pub const CELL: &str = "optima.cell";
    pub const FLUSH: &str = "optima.flush";
    pub const SUBMISSION: &str = "optima.submission";
}
