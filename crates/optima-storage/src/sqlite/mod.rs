//! SQLite-backed record store.

pub mod pragmas;
pub mod schema;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, TransactionBehavior};

use optima_core::errors::StoreError;
use optima_core::traits::{IRecordStore, ISourceTable, Row, SourceRow};

use self::pragmas::apply_pragmas;
use crate::to_store_err;

/// One serialized connection; every append is its own immediate transaction.
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteRecordStore {
    /// Open (or create) the database at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| to_store_err(e.to_string()))?;
        Self::init(conn, Some(path.to_path_buf()))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| to_store_err(e.to_string()))?;
        Self::init(conn, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self, StoreError> {
        apply_pragmas(&conn)?;
        conn.execute_batch(schema::SCHEMA_SQL)
            .map_err(|e| to_store_err(format!("schema: {e}")))?;
        tracing::debug!(path = ?path, "record store opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the rows of source table `table`.
    pub fn seed_source(&self, table: &str, rows: &[SourceRow]) -> Result<(), StoreError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| to_store_err(e.to_string()))?;
        tx.execute("DELETE FROM source_rows WHERE table_name = ?1", params![table])
            .map_err(|e| to_store_err(e.to_string()))?;
        {
            let mut stmt = tx
                .prepare_cached("INSERT INTO source_rows (table_name, payload) VALUES (?1, ?2)")
                .map_err(|e| to_store_err(e.to_string()))?;
            for row in rows {
                let payload = serde_json::to_string(row).map_err(|e| StoreError::Serialization {
                    message: e.to_string(),
                })?;
                stmt.execute(params![table, payload])
                    .map_err(|e| to_store_err(e.to_string()))?;
            }
        }
        tx.commit().map_err(|e| to_store_err(e.to_string()))
    }

    /// Number of rows appended to `table`.
    pub fn count(&self, table: &str) -> Result<usize, StoreError> {
        let conn = self.lock()?;
        let n: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM records WHERE table_name = ?1",
                params![table],
                |row| row.get(0),
            )
            .map_err(|e| to_store_err(e.to_string()))?;
        Ok(n as usize)
    }

    /// Rows appended to `table`, in append order.
    pub fn rows(&self, table: &str) -> Result<Vec<Row>, StoreError> {
        let conn = self.lock()?;
        let payloads = query_payloads(
            &conn,
            "SELECT payload FROM records WHERE table_name = ?1 ORDER BY id",
            table,
        )?;
        payloads
            .iter()
            .map(|p| {
                serde_json::from_str::<Row>(p).map_err(|e| StoreError::Serialization {
                    message: format!("{table}: {e}"),
                })
            })
            .collect()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

fn query_payloads(conn: &Connection, sql: &str, table: &str) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn
        .prepare_cached(sql)
        .map_err(|e| to_store_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![table], |row| row.get::<_, String>(0))
        .map_err(|e| to_store_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_store_err(e.to_string()))
}

impl IRecordStore for SqliteRecordStore {
    fn append(&self, table: &str, rows: &[Row]) -> Result<(), StoreError> {
        if rows.is_empty() {
            return Ok(());
        }
        let append_err = |e: rusqlite::Error| StoreError::AppendFailed {
            table: table.to_string(),
            message: e.to_string(),
        };

        let mut conn = self.lock()?;
        let tx = conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(append_err)?;
        let appended_at = Utc::now().to_rfc3339();
        {
            let mut stmt = tx
                .prepare_cached(
                    "INSERT INTO records (table_name, payload, appended_at) VALUES (?1, ?2, ?3)",
                )
                .map_err(append_err)?;
            for row in rows {
                let payload = serde_json::Value::Object(row.clone()).to_string();
                stmt.execute(params![table, payload, appended_at])
                    .map_err(append_err)?;
            }
        }
        tx.commit().map_err(append_err)?;
        tracing::trace!(table, rows = rows.len(), "rows appended");
        Ok(())
    }
}

impl ISourceTable for SqliteRecordStore {
    fn read(&self, table: &str) -> Result<Vec<SourceRow>, StoreError> {
        let conn = self.lock()?;
        let payloads = query_payloads(
            &conn,
            "SELECT payload FROM source_rows WHERE table_name = ?1 ORDER BY id",
            table,
        )?;
        if payloads.is_empty() {
            return Err(StoreError::TableNotFound {
                table: table.to_string(),
            });
        }
        payloads
            .iter()
            .map(|p| {
                serde_json::from_str::<SourceRow>(p).map_err(|e| StoreError::Serialization {
                    message: format!("{table}: {e}"),
                })
            })
            .collect()
    }
}
