//! Top-level tracker configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{HistoryConfig, PathsConfig, ReduceConfig, RenderConfig, RendererChoice, SyncConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CTS_*`)
/// 3. Project config (`cts-tracker.toml` in the source root)
/// 4. User config (`~/.cts-tracker/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrackerConfig {
    pub history: HistoryConfig,
    pub render: RenderConfig,
    pub reduce: ReduceConfig,
    pub sync: SyncConfig,
    pub paths: PathsConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_history_length: Option<usize>,
    pub renderer: Option<RendererChoice>,
    pub sync_enabled: Option<bool>,
    pub optimized_pass_from_debug: Option<bool>,
}

impl TrackerConfig {
    /// Load configuration with layered resolution for the source root `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TrackerConfig) -> Result<(), ConfigError> {
        if config.history.max_length == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "history.max_length".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(message) = &config.sync.commit_message {
            if message.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "sync.commit_message".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        let paths = [
            ("paths.data_dir", &config.paths.data_dir),
            ("paths.dump_file", &config.paths.dump_file),
            ("paths.history_file", &config.paths.history_file),
            ("paths.image_dir", &config.paths.image_dir),
        ];
        for (field, value) in paths {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.cts-tracker/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".cts-tracker").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut TrackerConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: TrackerConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut TrackerConfig, other: &TrackerConfig) {
        if other.history.max_length.is_some() {
            base.history.max_length = other.history.max_length;
        }

        if other.render.renderer.is_some() {
            base.render.renderer = other.render.renderer;
        }

        if other.reduce.optimized_pass_from_debug.is_some() {
            base.reduce.optimized_pass_from_debug = other.reduce.optimized_pass_from_debug;
        }

        if other.sync.enabled.is_some() {
            base.sync.enabled = other.sync.enabled;
        }
        if other.sync.commit_message.is_some() {
            base.sync.commit_message = other.sync.commit_message.clone();
        }

        if other.paths.data_dir.is_some() {
            base.paths.data_dir = other.paths.data_dir.clone();
        }
        if other.paths.dump_file.is_some() {
            base.paths.dump_file = other.paths.dump_file.clone();
        }
        if other.paths.history_file.is_some() {
            base.paths.history_file = other.paths.history_file.clone();
        }
        if other.paths.image_dir.is_some() {
            base.paths.image_dir = other.paths.image_dir.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CTS_HISTORY_MAX_LENGTH`, `CTS_RENDERER`, etc.
    fn apply_env_overrides(config: &mut TrackerConfig) {
        if let Ok(val) = std::env::var("CTS_HISTORY_MAX_LENGTH") {
            match val.parse::<usize>() {
                Ok(v) => config.history.max_length = Some(v),
                Err(_) => tracing::warn!(value = %val, "ignoring invalid CTS_HISTORY_MAX_LENGTH"),
            }
        }
        if let Ok(val) = std::env::var("CTS_RENDERER") {
            match val.parse::<RendererChoice>() {
                Ok(v) => config.render.renderer = Some(v),
                Err(e) => tracing::warn!(error = %e, "ignoring invalid CTS_RENDERER"),
            }
        }
        if let Ok(val) = std::env::var("CTS_SYNC_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.sync.enabled = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CTS_REDUCE_OPTIMIZED_PASS_FROM_DEBUG") {
            if let Ok(v) = val.parse::<bool>() {
                config.reduce.optimized_pass_from_debug = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TrackerConfig, cli: &CliOverrides) {
        if let Some(v) = cli.max_history_length {
            config.history.max_length = Some(v);
        }
        if let Some(v) = cli.renderer {
            config.render.renderer = Some(v);
        }
        if let Some(v) = cli.sync_enabled {
            config.sync.enabled = Some(v);
        }
        if let Some(v) = cli.optimized_pass_from_debug {
            config.reduce.optimized_pass_from_debug = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
