//! In-memory tables behind a mutex.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use optima_core::errors::StoreError;
use optima_core::traits::{IRecordStore, ISourceTable, Row, SourceRow};

#[derive(Default)]
struct Tables {
    records: BTreeMap<String, Vec<Row>>,
    /// Batch sizes of every append, per table.
    appends: BTreeMap<String, Vec<usize>>,
    sources: BTreeMap<String, Vec<SourceRow>>,
}

/// Record store and source table held in process memory.
#[derive(Default)]
pub struct MemoryRecordStore {
    tables: Mutex<Tables>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`seed_source`](Self::seed_source).
    pub fn with_source(self, table: &str, rows: Vec<SourceRow>) -> Self {
        // Fresh mutex: never poisoned.
        let _ = self.seed_source(table, rows);
        self
    }

    /// Replace the rows of source table `table`.
    pub fn seed_source(&self, table: &str, rows: Vec<SourceRow>) -> Result<(), StoreError> {
        self.lock()?.sources.insert(table.to_string(), rows);
        Ok(())
    }

    /// Every row appended to `table`, in append order.
    pub fn rows(&self, table: &str) -> Result<Vec<Row>, StoreError> {
        Ok(self.lock()?.records.get(table).cloned().unwrap_or_default())
    }

    pub fn count(&self, table: &str) -> Result<usize, StoreError> {
        Ok(self.lock()?.records.get(table).map_or(0, Vec::len))
    }

    /// Row count of each append call made against `table`.
    pub fn append_sizes(&self, table: &str) -> Result<Vec<usize>, StoreError> {
        Ok(self.lock()?.appends.get(table).cloned().unwrap_or_default())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl IRecordStore for MemoryRecordStore {
    fn append(&self, table: &str, rows: &[Row]) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        tables
            .records
            .entry(table.to_string())
            .or_default()
            .extend(rows.iter().cloned());
        tables
            .appends
            .entry(table.to_string())
            .or_default()
            .push(rows.len());
        Ok(())
    }
}

impl ISourceTable for MemoryRecordStore {
    fn read(&self, table: &str) -> Result<Vec<SourceRow>, StoreError> {
        self.lock()?
            .sources
            .get(table)
            .cloned()
            .ok_or_else(|| StoreError::TableNotFound {
                table: table.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(run_id: &str) -> Row {
        let mut row = Row::new();
        row.insert("run_id".into(), json!(run_id));
        row
    }

    #[test]
    fn append_accumulates_and_tracks_batches() {
        let store = MemoryRecordStore::new();
        store.append("runs", &[row("a"), row("b")]).unwrap();
        store.append("runs", &[row("c")]).unwrap();
        assert_eq!(store.count("runs").unwrap(), 3);
        assert_eq!(store.append_sizes("runs").unwrap(), vec![2, 1]);
        assert_eq!(store.rows("runs").unwrap()[2]["run_id"], "c");
        assert_eq!(store.count("evaluations").unwrap(), 0);
    }

    #[test]
    fn unknown_source_table_is_an_error() {
        let store = MemoryRecordStore::new();
        assert!(matches!(
            store.read("problems"),
            Err(StoreError::TableNotFound { .. })
        ));
    }

    #[test]
    fn seeded_source_reads_back() {
        let mut source = SourceRow::new();
        source.insert("problem".into(), "2 + 2?".into());
        let store = MemoryRecordStore::new().with_source("problems", vec![source.clone()]);
        assert_eq!(store.read("problems").unwrap(), vec![source]);
    }
}
