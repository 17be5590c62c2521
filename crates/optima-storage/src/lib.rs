//! # optima-storage
//!
//! Adapters behind `IRecordStore` and `ISourceTable`:
//! an in-memory store for tests and embedding, and a SQLite store that keeps
//! every appended row as a JSON payload.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryRecordStore;
pub use sqlite::SqliteRecordStore;

use optima_core::errors::StoreError;

pub(crate) fn to_store_err(message: impl Into<String>) -> StoreError {
    StoreError::SqliteError {
        message: message.into(),
    }
}
