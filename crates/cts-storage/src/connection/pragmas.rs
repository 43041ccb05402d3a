//! PRAGMA configuration applied to every history connection.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout, temp_store MEMORY.

use cts_core::errors::StorageError;
use rusqlite::Connection;

/// Apply the durability and locking pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply pragmas: {e}"),
    })
}

/// Fold the WAL back into the main file so a commit of the repository
/// picks up the current history.
pub fn checkpoint(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
        .map_err(|e| StorageError::SqliteError {
            message: format!("failed to checkpoint: {e}"),
        })
}
