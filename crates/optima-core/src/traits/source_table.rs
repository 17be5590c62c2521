use std::collections::BTreeMap;

use crate::errors::StoreError;

/// One source row: header → cell text.
pub type SourceRow = BTreeMap<String, String>;

/// Reader for the problem bank. Called once per batch.
pub trait ISourceTable: Send + Sync {
    fn read(&self, table: &str) -> Result<Vec<SourceRow>, StoreError>;
}
