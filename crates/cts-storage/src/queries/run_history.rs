//! Queries for the run_history table.

use cts_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

/// A stored run, still encoded.
#[derive(Debug, Clone)]
pub struct RunHistoryRow {
    pub seq: i64,
    pub run_timestamp: String,
    pub stats_json: String,
}

/// Append one encoded run. Returns its seq.
pub fn insert_run(
    conn: &Connection,
    run_timestamp: &str,
    stats_json: &str,
) -> Result<i64, StorageError> {
    conn.prepare_cached("INSERT INTO run_history (run_timestamp, stats_json) VALUES (?1, ?2)")
        .and_then(|mut stmt| stmt.execute(params![run_timestamp, stats_json]))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(conn.last_insert_rowid())
}

/// All stored runs, oldest first.
pub fn query_all(conn: &Connection) -> Result<Vec<RunHistoryRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT seq, run_timestamp, stats_json FROM run_history ORDER BY seq ASC")
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(RunHistoryRow {
                seq: row.get(0)?,
                run_timestamp: row.get(1)?,
                stats_json: row.get(2)?,
            })
        })
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Timestamp of the most recently appended run, if any.
pub fn query_latest_timestamp(conn: &Connection) -> Result<Option<(i64, String)>, StorageError> {
    conn.query_row(
        "SELECT seq, run_timestamp FROM run_history ORDER BY seq DESC LIMIT 1",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Number of stored runs.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM run_history", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Remove every stored run. Returns the number of rows deleted.
pub fn delete_all(conn: &Connection) -> Result<usize, StorageError> {
    conn.execute("DELETE FROM run_history", [])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
