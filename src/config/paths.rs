// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! base/
//!   project-a/     (.git, github_streak_keeper.txt)
//!   project-b/
//!   backup_logs/   (default logs dir, never treated as a project)
//!     project-a-backup.yaml
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default name of the logs directory inside `base`.
pub const DEFAULT_LOGS_DIR: &str = "backup_logs";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory whose immediate subdirectories are the projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<PathBuf>,
    /// Project log directory (default: `base/backup_logs`, relative paths
    /// resolve against `base`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<PathBuf>,
}

impl PathsConfig {
    /// Make `base` absolute and fill in the logs directory relative to it.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `base` is not set, or
    /// `ConfigError::InvalidValue` if it cannot be made absolute.
    pub fn resolve(&mut self) -> Result<()> {
        let base = std::path::absolute(self.base()?).map_err(|e| ConfigError::InvalidValue {
            section: "paths".to_string(),
            key: "base".to_string(),
            message: e.to_string(),
        })?;
        self.base = Some(base.clone());

        self.logs = Some(match self.logs.take() {
            Some(p) if p.is_relative() => base.join(p),
            Some(p) => p,
            None => base.join(DEFAULT_LOGS_DIR),
        });

        Ok(())
    }

    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if `base` is not set.
    pub fn base(&self) -> Result<&Path> {
        self.base.as_deref().ok_or_else(|| {
            ConfigError::MissingKey {
                section: "paths".to_string(),
                key: "base".to_string(),
            }
            .into()
        })
    }

    /// Resolved logs directory; falls back to the default under `base` when
    /// [`resolve`](Self::resolve) has not run. After `resolve` the stored
    /// path is absolute and returned as is.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if neither `logs` nor `base` is set.
    pub fn logs(&self) -> Result<PathBuf> {
        match &self.logs {
            Some(p) if p.is_absolute() => Ok(p.clone()),
            Some(p) => Ok(self.base()?.join(p)),
            None => Ok(self.base()?.join(DEFAULT_LOGS_DIR)),
        }
    }
}
