//! Batch orchestration errors.

use super::error_code::{self, OptimaErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("invalid cell transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("cell {run_id} failed at {stage}: {message}")]
    CellFailed {
        run_id: String,
        stage: String,
        message: String,
    },
}

impl OptimaErrorCode for BatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => error_code::INVALID_TRANSITION,
            Self::CellFailed { .. } => error_code::BATCH_ERROR,
        }
    }
}
