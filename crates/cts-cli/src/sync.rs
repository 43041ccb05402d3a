//! Repository synchronization around a run.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use cts_core::errors::SyncError;

/// Version control operations the tracker needs.
pub trait VersionControl {
    fn name(&self) -> &'static str;

    /// Bring the working copy up to date before the dump is read.
    fn pull(&self, repo: &Path) -> Result<(), SyncError>;

    /// Stage everything, commit with `message`, and push.
    fn publish(&self, repo: &Path, message: &str) -> Result<(), SyncError>;
}

/// Runs the `git` executable in the repository root.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, repo: &Path, args: &[&str]) -> Result<String, SyncError> {
        let command = format!("git {}", args.join(" "));
        tracing::debug!(%command, repo = %repo.display(), "running");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(repo)
            .output()
            .map_err(|e| SyncError::Spawn {
                command: command.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SyncError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    fn name(&self) -> &'static str {
        "git"
    }

    fn pull(&self, repo: &Path) -> Result<(), SyncError> {
        let out = self.run(repo, &["pull"])?;
        tracing::info!(output = %out, "pulled repository");
        Ok(())
    }

    fn publish(&self, repo: &Path, message: &str) -> Result<(), SyncError> {
        self.run(repo, &["add", "."])?;
        self.run(repo, &["commit", "-m", message])?;
        self.run(repo, &["push"])?;
        tracing::info!(%message, "published history and charts");
        Ok(())
    }
}

/// Leaves the repository alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSync;

impl VersionControl for NoSync {
    fn name(&self) -> &'static str {
        "none"
    }

    fn pull(&self, _repo: &Path) -> Result<(), SyncError> {
        Ok(())
    }

    fn publish(&self, _repo: &Path, _message: &str) -> Result<(), SyncError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cts_core::errors::CtsErrorCode;

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let git = GitCli::with_program("definitely-not-a-real-git-binary");
        let err = git.pull(dir.path()).unwrap_err();
        assert!(matches!(err, SyncError::Spawn { ref command, .. } if command == "git pull"));
        assert_eq!(err.error_code(), "SYNC_ERROR");
    }

    #[test]
    fn no_sync_succeeds_without_a_repository() {
        let missing = Path::new("/nonexistent/cts-repo");
        assert!(NoSync.pull(missing).is_ok());
        assert!(NoSync.publish(missing, "msg").is_ok());
    }
}
