// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for streak-rs.
//!
//! ```text
//! [backup]  sentinel_file, remote
//! [log]     rollover = modified | last-entry
//! ```

use serde::{Deserialize, Serialize};

/// Default name of the file written to keep a streak alive.
pub const DEFAULT_SENTINEL_FILE: &str = "github_streak_keeper.txt";

/// Commit and push behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackupConfig {
    /// File created inside a clean repository to produce a commit.
    pub sentinel_file: String,
    /// Remote to push to. `None` runs a bare `git push` against the
    /// branch's configured upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            sentinel_file: DEFAULT_SENTINEL_FILE.to_string(),
            remote: None,
        }
    }
}

/// What decides that a project log belongs to a previous day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RolloverKey {
    /// Last-modified date of the log file.
    #[default]
    Modified,
    /// Date of the newest stored entry.
    LastEntry,
}

impl std::fmt::Display for RolloverKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Modified => write!(f, "modified"),
            Self::LastEntry => write!(f, "last-entry"),
        }
    }
}

/// Project log settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub rollover: RolloverKey,
}
