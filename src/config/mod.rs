// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for streak-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. streak.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. STREAK_* env vars
//! 5. CLI overrides (--base-dir, --logs-dir)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! STREAK_PATHS__BASE=/src               → paths.base = "/src"
//! STREAK_PATHS__LOGS=/var/log           → paths.logs = "/var/log"
//! STREAK_BACKUP__SENTINEL_FILE=keep.txt → backup.sentinel_file = "keep.txt"
//! STREAK_LOG__ROLLOVER=last-entry       → log.rollover = "last-entry"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{BackupConfig, LogSettings};

/// Name of the optional config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "streak.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where projects and logs live.
    pub paths: PathsConfig,
    /// Commit and push behavior.
    pub backup: BackupConfig,
    /// Project log behavior.
    pub log: LogSettings,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use streak_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("streak.toml")
    ///     .with_env_prefix("STREAK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML, does not match the
    /// `Config` structure, or fails validation.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve paths and validate values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` without `paths.base`, and
    /// `ConfigError::InvalidValue` for a sentinel name that is not a plain
    /// file name or an empty remote.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()?;

        let sentinel = Path::new(&self.backup.sentinel_file);
        if self.backup.sentinel_file.is_empty()
            || sentinel.file_name() != Some(sentinel.as_os_str())
        {
            return Err(ConfigError::InvalidValue {
                section: "backup".to_string(),
                key: "sentinel_file".to_string(),
                message: format!(
                    "expected a plain file name, got '{}'",
                    self.backup.sentinel_file
                ),
            }
            .into());
        }

        if self.backup.remote.as_deref().is_some_and(str::is_empty) {
            return Err(ConfigError::InvalidValue {
                section: "backup".to_string(),
                key: "remote".to_string(),
                message: "remote name must not be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line,
    /// keys aligned and sorted.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: Option<&Path>| p.map_or_else(String::new, |p| p.display().to_string());

        let mut options = BTreeMap::new();
        options.insert("paths.base", fmt(self.paths.base.as_deref()));
        options.insert("paths.logs", fmt(self.paths.logs.as_deref()));
        options.insert("backup.sentinel_file", self.backup.sentinel_file.clone());
        options.insert(
            "backup.remote",
            self.backup
                .remote
                .clone()
                .unwrap_or_else(|| "(upstream)".to_string()),
        );
        options.insert("log.rollover", self.log.rollover.to_string());

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
