//! Errors raised while reading structured collaborator output.

use super::error_code::{self, OptimaErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("no JSON object found in response")]
    NoJsonObject,

    #[error("invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("missing section: {section}")]
    MissingSection { section: String },
}

impl OptimaErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
