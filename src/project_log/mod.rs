// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-project YAML backup log.
//!
//! ```text
//! logs/<project>-backup.yaml
//!
//! backup_logs:
//! - timestamp: 2026-10-18 09:00:01
//!   type: INFO
//!   project: dotfiles
//!   message: Successfully pushed to remote
//! ```
//!
//! Each write rewrites the whole document. A document from a previous day is
//! discarded on the next write, so a file only ever holds one day of entries.
//! Which date counts is decided by [`RolloverKey`]: the file's modification
//! time (default) or the newest entry's timestamp.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::types::RolloverKey;
use crate::error::{LogError, StreakResult};

/// Timestamp layout for entries and commit messages.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a local time with [`TIMESTAMP_FORMAT`].
#[must_use]
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Info,
    Error,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Info => "INFO",
            Self::Error => "ERROR",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub project: String,
    pub message: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LogDocument {
    #[serde(default)]
    backup_logs: Vec<LogEntry>,
}

/// Writer for the per-project logs in one directory.
#[derive(Debug, Clone)]
pub struct ProjectLog {
    dir: PathBuf,
    rollover: RolloverKey,
}

impl ProjectLog {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, rollover: RolloverKey) -> Self {
        Self {
            dir: dir.into(),
            rollover,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, project: &str) -> PathBuf {
        self.dir.join(format!("{project}-backup.yaml"))
    }

    /// Append an entry stamped with the current local time.
    ///
    /// # Errors
    ///
    /// Returns a `LogError` if the log cannot be written.
    pub fn write(&self, project: &str, message: &str, kind: EntryKind) -> StreakResult<()> {
        self.write_at(project, message, kind, Local::now())
    }

    /// Append an entry as of `now`, starting a fresh document when the
    /// existing one belongs to another day.
    ///
    /// # Errors
    ///
    /// Returns a `LogError` if the existing log cannot be inspected or the
    /// new document cannot be written.
    pub fn write_at(
        &self,
        project: &str,
        message: &str,
        kind: EntryKind,
        now: DateTime<Local>,
    ) -> StreakResult<()> {
        let path = self.path_for(project);
        let today = now.date_naive();

        let current = match self.rollover {
            RolloverKey::Modified if modified_on(&path, today)? => load(&path)?,
            RolloverKey::Modified => None,
            RolloverKey::LastEntry => {
                load(&path)?.filter(|document| last_entry_on(document, today))
            }
        };
        if current.is_none() && path.exists() {
            debug!(project, path = %path.display(), "starting new day log");
        }
        let mut document = current.unwrap_or_default();

        document.backup_logs.push(LogEntry {
            timestamp: format_timestamp(&now),
            kind,
            project: project.to_string(),
            message: message.to_string(),
        });

        self.store(&path, &document)
    }

    /// Entries currently stored for `project`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a `LogError` if the log exists but cannot be read.
    pub fn entries(&self, project: &str) -> StreakResult<Vec<LogEntry>> {
        Ok(load(&self.path_for(project))?
            .map(|document| document.backup_logs)
            .unwrap_or_default())
    }

    /// Replace the file through a temp file in the same directory.
    fn store(&self, path: &Path, document: &LogDocument) -> StreakResult<()> {
        let write_err = |source: std::io::Error| LogError::Write {
            path: path.display().to_string(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(write_err)?;
        let text = serde_yaml::to_string(document).map_err(|source| LogError::Serialize {
            path: path.display().to_string(),
            source,
        })?;

        let mut file = tempfile::NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        file.write_all(text.as_bytes()).map_err(write_err)?;
        file.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// `None` when the file is absent; undecodable content loads as empty.
fn load(path: &Path) -> StreakResult<Option<LogDocument>> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = std::fs::read(path).map_err(|source| LogError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let document = serde_yaml::from_slice(&bytes).unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "unreadable log, starting empty");
        LogDocument::default()
    });
    Ok(Some(document))
}

/// True if the file exists and was last modified on `day`.
fn modified_on(path: &Path, day: NaiveDate) -> StreakResult<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let modified = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| LogError::Read {
            path: path.display().to_string(),
            source,
        })?;
    Ok(DateTime::<Local>::from(modified).date_naive() == day)
}

/// True if the newest entry was written on `day`; an empty log counts as
/// current and an unparseable timestamp as stale.
fn last_entry_on(document: &LogDocument, day: NaiveDate) -> bool {
    document.backup_logs.last().is_none_or(|entry| {
        NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT)
            .is_ok_and(|stamp| stamp.date() == day)
    })
}

#[cfg(test)]
mod tests;
