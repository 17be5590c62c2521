//! Store schema. Rows of every logical table share one physical table.

pub const SCHEMA_SQL: &str = r#"
-- Appended records; payload is the flattened row as a JSON object.
CREATE TABLE IF NOT EXISTS records (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    table_name TEXT NOT NULL,
    payload TEXT NOT NULL,
    appended_at TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_records_table ON records(table_name);

-- Problem bank rows keyed by header.
CREATE TABLE IF NOT EXISTS source_rows (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    table_name TEXT NOT NULL,
    payload TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_source_rows_table ON source_rows(table_name);
"#;
