//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::OptimaErrorCode;
use super::{
    BatchError, CollaboratorError, ConfigError, InputError, ParseError, StoreError,
};

#[derive(Debug, thiserror::Error)]
pub enum OptimaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),
}

pub type OptimaResult<T> = Result<T, OptimaError>;

impl OptimaErrorCode for OptimaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::Collaborator(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Batch(e) => e.error_code(),
        }
    }
}
