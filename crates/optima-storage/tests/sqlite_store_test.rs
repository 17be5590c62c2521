//! SQLite store: appends, source rows, persistence across reopen.

use optima_core::errors::StoreError;
use optima_core::models::Evaluation;
use optima_core::traits::{to_row, IRecordStore, ISourceTable, SourceRow, ToRow};
use optima_storage::SqliteRecordStore;

fn source_row(problem: &str, level: &str) -> SourceRow {
    let mut row = SourceRow::new();
    row.insert("problem".to_string(), problem.to_string());
    row.insert("level".to_string(), level.to_string());
    row
}

#[test]
fn appended_rows_round_trip() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    let evals = vec![
        Evaluation::new("r-1", "AI Grader", true, "ok"),
        Evaluation::new("r-2", "AI Grader", false, "wrong"),
    ];
    let rows = to_row::to_rows(&evals).unwrap();
    store.append(Evaluation::TABLE, &rows).unwrap();

    assert_eq!(store.count("evaluations").unwrap(), 2);
    assert_eq!(store.count("runs").unwrap(), 0);
    let back = store.rows("evaluations").unwrap();
    assert_eq!(back, rows);
    assert_eq!(back[1]["run_id"], "r-2");
}

#[test]
fn empty_append_is_a_no_op() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    store.append("runs", &[]).unwrap();
    assert_eq!(store.count("runs").unwrap(), 0);
}

#[test]
fn source_rows_round_trip_and_reseed() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    assert!(matches!(
        store.read("problems"),
        Err(StoreError::TableNotFound { .. })
    ));

    store
        .seed_source("problems", &[source_row("1 + 1", "1"), source_row("2 + 2", "2")])
        .unwrap();
    let rows = store.read("problems").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["problem"], "1 + 1");

    store.seed_source("problems", &[source_row("3 + 3", "3")]).unwrap();
    assert_eq!(store.read("problems").unwrap(), vec![source_row("3 + 3", "3")]);
}

#[test]
fn records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("optima.db");
    {
        let store = SqliteRecordStore::open(&path).unwrap();
        let row = Evaluation::new("r-1", "Manual", true, "").to_row().unwrap();
        store.append("evaluations", &[row]).unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
    }
    let reopened = SqliteRecordStore::open(&path).unwrap();
    assert_eq!(reopened.count("evaluations").unwrap(), 1);
}
