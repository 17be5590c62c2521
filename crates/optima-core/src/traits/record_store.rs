use crate::errors::StoreError;

use super::Row;

/// Append-only tabular store. Best effort: callers log failures and move on.
pub trait IRecordStore: Send + Sync {
    fn append(&self, table: &str, rows: &[Row]) -> Result<(), StoreError>;
}
