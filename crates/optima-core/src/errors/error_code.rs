//! Stable error codes surfaced to logs and downstream tooling.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const COLLABORATOR_ERROR: &str = "COLLABORATOR_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const STORE_ERROR: &str = "STORE_ERROR";
pub const BATCH_ERROR: &str = "BATCH_ERROR";
pub const INVALID_TRANSITION: &str = "INVALID_TRANSITION";

/// Every error type exposes a code that does not change between releases.
pub trait OptimaErrorCode {
    fn error_code(&self) -> &'static str;
}
