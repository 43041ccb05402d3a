//! The bounded, ordered sequence of past runs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, SecondsFormat, Utc};
use cts_core::errors::StorageError;
use cts_core::RunStats;
use rusqlite::Connection;

use crate::connection::{self, pragmas};
use crate::queries::run_history;

/// Append `entry` as the newest run, dropping the oldest runs so that at most
/// `max_length` remain. A `max_length` of zero keeps nothing.
pub fn append_and_bound(
    mut history: Vec<RunStats>,
    entry: RunStats,
    max_length: usize,
) -> Vec<RunStats> {
    history.push(entry);
    let excess = history.len().saturating_sub(max_length);
    history.drain(..excess);
    history
}

/// SQLite-backed store holding the whole history of one repository.
pub struct HistoryStore {
    conn: Connection,
    path: Option<PathBuf>,
}

impl HistoryStore {
    /// Open (or create) the history database at `path`.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = connection::open(path)?;
        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an empty in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            conn: connection::open_in_memory()?,
            path: None,
        })
    }

    /// Every stored run, oldest first. A fresh store yields an empty history.
    pub fn load(&self) -> Result<Vec<RunStats>, StorageError> {
        run_history::query_all(&self.conn)?
            .into_iter()
            .map(|row| {
                serde_json::from_str::<RunStats>(&row.stats_json).map_err(|e| {
                    StorageError::CorruptEntry {
                        seq: row.seq,
                        message: e.to_string(),
                    }
                })
            })
            .collect()
    }

    /// Replace the stored sequence with `history`, all or nothing.
    pub fn save(&self, history: &[RunStats]) -> Result<(), StorageError> {
        let start = Instant::now();
        let encoded = history
            .iter()
            .map(|stats| {
                serde_json::to_string(stats)
                    .map(|json| (encode_timestamp(stats.run_timestamp()), json))
                    .map_err(|e| StorageError::Encode {
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // RAII transaction: rolled back on drop unless committed.
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(|e| StorageError::SqliteError {
                message: format!("history save begin: {e}"),
            })?;

        let removed = run_history::delete_all(&tx)?;
        for (run_timestamp, stats_json) in &encoded {
            run_history::insert_run(&tx, run_timestamp, stats_json)?;
        }

        tx.commit()
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

        if let Some(path) = &self.path {
            pragmas::checkpoint(&self.conn)?;
            tracing::trace!(path = %path.display(), "checkpointed wal");
        }

        tracing::debug!(
            removed,
            stored = encoded.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "saved history"
        );
        Ok(())
    }

    /// Timestamp of the newest stored run.
    pub fn latest_run_timestamp(&self) -> Result<Option<DateTime<Utc>>, StorageError> {
        run_history::query_latest_timestamp(&self.conn)?
            .map(|(seq, raw)| decode_timestamp(seq, &raw))
            .transpose()
    }

    /// Number of stored runs.
    pub fn len(&self) -> Result<usize, StorageError> {
        run_history::count(&self.conn).map(|n| n as usize)
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        self.len().map(|n| n == 0)
    }
}

fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_timestamp(seq: i64, raw: &str) -> Result<DateTime<Utc>, StorageError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| StorageError::CorruptEntry {
            seq,
            message: format!("invalid run timestamp {raw:?}: {e}"),
        })
}
