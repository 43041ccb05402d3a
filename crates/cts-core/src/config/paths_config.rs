//! Repository layout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_DUMP_FILE, DEFAULT_HISTORY_FILE, DEFAULT_IMAGE_DIR,
};
use crate::errors::InputError;

/// Names of the files and directories under the source root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Data directory relative to the root. Default: `data`.
    pub data_dir: Option<String>,
    /// Dump file inside the data directory. Default: `dump.json`.
    pub dump_file: Option<String>,
    /// History database inside the data directory. Default: `history.db`.
    pub history_file: Option<String>,
    /// Chart directory relative to the root. Default: `images`.
    pub image_dir: Option<String>,
}

impl PathsConfig {
    /// Resolve every location against `root`.
    pub fn layout(&self, root: &Path) -> RepoLayout {
        let data_dir = root.join(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR));
        RepoLayout {
            root: root.to_path_buf(),
            dump_file: data_dir.join(self.dump_file.as_deref().unwrap_or(DEFAULT_DUMP_FILE)),
            history_file: data_dir
                .join(self.history_file.as_deref().unwrap_or(DEFAULT_HISTORY_FILE)),
            image_dir: root.join(self.image_dir.as_deref().unwrap_or(DEFAULT_IMAGE_DIR)),
            data_dir,
        }
    }
}

/// Concrete paths of one source repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub dump_file: PathBuf,
    pub history_file: PathBuf,
    pub image_dir: PathBuf,
}

impl RepoLayout {
    /// Check that the root and its required directories exist.
    ///
    /// The dump file itself is checked separately since a pull may create it.
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.root.is_dir() {
            return Err(InputError::SourceMissing {
                path: self.root.display().to_string(),
            });
        }
        for dir in [&self.data_dir, &self.image_dir] {
            if !dir.is_dir() {
                return Err(InputError::DirectoryMissing {
                    path: dir.display().to_string(),
                });
            }
        }
        Ok(())
    }
}
