//! Reads a dump file and its modification time.

use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use cts_core::errors::InputError;

use super::types::Dump;

/// A parsed dump together with the time its file was last modified.
#[derive(Debug, Clone)]
pub struct LoadedDump {
    pub dump: Dump,
    pub modified: DateTime<Utc>,
}

/// Modification time of the dump file, used for change detection.
pub fn dump_modified(path: &Path) -> Result<DateTime<Utc>, InputError> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;
    if !metadata.is_file() {
        return Err(InputError::DumpMissing {
            path: path.display().to_string(),
        });
    }
    let modified = metadata.modified().map_err(|e| io_error(path, e))?;
    Ok(DateTime::<Utc>::from(modified))
}

/// Read and parse the whole dump at `path`.
pub fn load_dump(path: &Path) -> Result<LoadedDump, InputError> {
    let modified = dump_modified(path)?;
    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let dump = Dump::from_json_slice(&bytes).map_err(|e| InputError::Malformed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(
        path = %path.display(),
        bytes = bytes.len(),
        categories = dump.categories.len(),
        "loaded dump"
    );
    Ok(LoadedDump { dump, modified })
}

fn io_error(path: &Path, e: std::io::Error) -> InputError {
    match e.kind() {
        ErrorKind::NotFound => InputError::DumpMissing {
            path: path.display().to_string(),
        },
        _ => InputError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    }
}
