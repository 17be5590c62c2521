//! Errors returned by external collaborators (analyzer, solver, judger, synthesizer).

use super::error_code::{self, OptimaErrorCode};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{collaborator} unavailable: {message}")]
    Unavailable {
        collaborator: String,
        message: String,
    },

    #[error("{collaborator} call failed: {message}")]
    CallFailed {
        collaborator: String,
        message: String,
    },

    #[error("{collaborator} returned a malformed response: {message}")]
    MalformedResponse {
        collaborator: String,
        message: String,
    },
}

impl CollaboratorError {
    pub fn call_failed(collaborator: &str, message: impl Into<String>) -> Self {
        Self::CallFailed {
            collaborator: collaborator.to_string(),
            message: message.into(),
        }
    }

    /// Name of the collaborator that failed.
    pub fn collaborator(&self) -> &str {
        match self {
            Self::Unavailable { collaborator, .. }
            | Self::CallFailed { collaborator, .. }
            | Self::MalformedResponse { collaborator, .. } => collaborator,
        }
    }
}

impl OptimaErrorCode for CollaboratorError {
    fn error_code(&self) -> &'static str {
        error_code::COLLABORATOR_ERROR
    }
}
