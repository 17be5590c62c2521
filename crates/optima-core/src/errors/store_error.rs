//! Record store errors.

use super::error_code::{self, OptimaErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("append to {table} failed: {message}")]
    AppendFailed { table: String, message: String },

    #[error("table not found: {table}")]
    TableNotFound { table: String },

    #[error("serialization error: {message}")]
    Serialization { message: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}

impl OptimaErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        error_code::STORE_ERROR
    }
}
