//! PRAGMA configuration applied to every store connection.

use rusqlite::Connection;

use optima_core::errors::StoreError;

use crate::to_store_err;

/// WAL journal, NORMAL sync, 5s busy timeout.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_store_err(e.to_string()))
}
