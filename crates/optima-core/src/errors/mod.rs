//! Error handling for PromptOptima.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod batch_error;
pub mod collaborator_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod optima_error;
pub mod parse_error;
pub mod store_error;

pub use batch_error::BatchError;
pub use collaborator_error::CollaboratorError;
pub use config_error::ConfigError;
pub use error_code::OptimaErrorCode;
pub use input_error::InputError;
pub use optima_error::{OptimaError, OptimaResult};
pub use parse_error::ParseError;
pub use store_error::StoreError;
