// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Backup of a single repository.
//!
//! ```text
//! not a repo ------------------------------> NotARepository (streak, false)
//! streak kept && clean --------------------> Skipped        (streak, true)
//! git add . ----- fail --------------------> StageFailed    (streak, false)
//! git commit ---- fail --------------------> CommitFailed   (streak, false)
//!      |
//!      +-- nothing to commit
//!      |      streak kept -----------------> NoActionNeeded (streak, true)
//!      |      else: write sentinel, add, commit
//!      v
//! git push ------ fail --------------------> PushFailed     (streak, false)
//!      '----------------------------------> Pushed         (true,   true)
//!
//! anything unexpected (I/O, spawn) --------> Failed         (streak, false)
//! ```
//!
//! The streak flag is passed in and handed back; nothing here is global.

pub mod run;


use chrono::Local;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, info_span};

use crate::config::types::BackupConfig;
use crate::error::StreakResult;
use crate::git::backend::GitBackend;
use crate::git::cmd::CommitOutcome;
use crate::git::query::get_changes;
use crate::project_log::{EntryKind, ProjectLog, format_timestamp};

/// Prefix of commits that capture real changes.
pub const AUTO_BACKUP_PREFIX: &str = "auto backup";
/// Prefix of commits made only to keep the streak.
pub const STREAK_KEEPER_PREFIX: &str = "streak keeper";

/// Terminal state of one backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackupAction {
    NotARepository,
    Skipped,
    StageFailed,
    CommitFailed,
    NoActionNeeded,
    PushFailed,
    Pushed,
    Failed,
}

/// What a backup did and the streak state to carry forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackupOutcome {
    pub streak_maintained: bool,
    pub succeeded: bool,
    pub action: BackupAction,
}

impl BackupOutcome {
    const fn success(streak_maintained: bool, action: BackupAction) -> Self {
        Self {
            streak_maintained,
            succeeded: true,
            action,
        }
    }

    const fn failure(streak_maintained: bool, action: BackupAction) -> Self {
        Self {
            streak_maintained,
            succeeded: false,
            action,
        }
    }

    /// `(new_streak_maintained, succeeded)`.
    #[must_use]
    pub const fn as_pair(&self) -> (bool, bool) {
        (self.streak_maintained, self.succeeded)
    }
}

/// Commit message for a backup made at `timestamp`.
#[must_use]
pub fn commit_message(has_changes: bool, timestamp: &str) -> String {
    let prefix = if has_changes {
        AUTO_BACKUP_PREFIX
    } else {
        STREAK_KEEPER_PREFIX
    };
    format!("{prefix} - {timestamp}")
}

/// Backs up repositories through a git backend, recording each step in the
/// project log.
pub struct Backer<'a, G: ?Sized> {
    git: &'a G,
    log: &'a ProjectLog,
    config: &'a BackupConfig,
}

impl<'a, G: GitBackend + ?Sized> Backer<'a, G> {
    #[must_use]
    pub const fn new(git: &'a G, log: &'a ProjectLog, config: &'a BackupConfig) -> Self {
        Self { git, log, config }
    }

    #[must_use]
    pub const fn log(&self) -> &ProjectLog {
        self.log
    }

    /// Stage, commit and push one repository.
    ///
    /// Never fails: unexpected errors are logged against the project and
    /// reported as an unsuccessful outcome with the streak unchanged.
    pub fn backup(&self, path: &Path, name: &str, streak_maintained: bool) -> BackupOutcome {
        let span = info_span!("backup", project = %name);
        let _enter = span.enter();

        match self.try_backup(path, name, streak_maintained) {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("Backup failed: {e}");
                if let Err(log_err) = self.note(name, EntryKind::Error, &message) {
                    error!(error = %log_err, "could not record failure in project log");
                }
                BackupOutcome::failure(streak_maintained, BackupAction::Failed)
            }
        }
    }

    fn try_backup(
        &self,
        path: &Path,
        name: &str,
        streak_maintained: bool,
    ) -> StreakResult<BackupOutcome> {
        if !self.git.is_repository(path) {
            self.note(name, EntryKind::Error, "Not a git repository")?;
            return Ok(BackupOutcome::failure(
                streak_maintained,
                BackupAction::NotARepository,
            ));
        }

        let changes = get_changes(self.git, path);

        if streak_maintained {
            if changes.is_none() {
                self.note(
                    name,
                    EntryKind::Info,
                    "Skipped - streak already maintained and no changes",
                )?;
                return Ok(BackupOutcome::success(
                    streak_maintained,
                    BackupAction::Skipped,
                ));
            }
            info!("streak already maintained but changes are pending");
        }

        match &changes {
            Some(changes) => self.note(
                name,
                EntryKind::Info,
                &format!("Starting backup - Changes detected: {changes}"),
            )?,
            None => self.note(name, EntryKind::Info, "Starting backup - No changes detected")?,
        }

        if let Err(e) = self.git.stage_all(path) {
            self.note(name, EntryKind::Error, &format!("Git add failed: {}", e.detail()))?;
            return Ok(BackupOutcome::failure(
                streak_maintained,
                BackupAction::StageFailed,
            ));
        }
        self.note(name, EntryKind::Info, "Git add completed")?;

        let timestamp = format_timestamp(&Local::now());
        let message = commit_message(changes.is_some(), &timestamp);

        match self.git.commit(path, &message) {
            Ok(CommitOutcome::Committed) => match &changes {
                Some(changes) => self.note(
                    name,
                    EntryKind::Info,
                    &format!("Committed actual changes: {changes}"),
                )?,
                None => self.note(name, EntryKind::Info, "Committed streak keeper")?,
            },
            Ok(CommitOutcome::NothingToCommit) => {
                self.note(name, EntryKind::Info, "No changes to commit")?;

                if streak_maintained {
                    self.note(
                        name,
                        EntryKind::Info,
                        "Streak already maintained - no action needed",
                    )?;
                    return Ok(BackupOutcome::success(
                        streak_maintained,
                        BackupAction::NoActionNeeded,
                    ));
                }

                if let Some(outcome) = self.commit_sentinel(path, name, &timestamp)? {
                    return Ok(outcome);
                }
            }
            Err(e) => {
                self.note(name, EntryKind::Error, &format!("Git commit failed: {}", e.detail()))?;
                return Ok(BackupOutcome::failure(
                    streak_maintained,
                    BackupAction::CommitFailed,
                ));
            }
        }

        if let Err(e) = self.git.push(path, self.config.remote.as_deref()) {
            self.note(name, EntryKind::Error, &format!("Git push failed: {}", e.detail()))?;
            return Ok(BackupOutcome::failure(
                streak_maintained,
                BackupAction::PushFailed,
            ));
        }
        self.note(name, EntryKind::Info, "Successfully pushed to remote")?;

        Ok(BackupOutcome::success(true, BackupAction::Pushed))
    }

    /// Write the sentinel file and commit it. Returns an outcome only when
    /// the sentinel commit did not happen.
    fn commit_sentinel(
        &self,
        path: &Path,
        name: &str,
        timestamp: &str,
    ) -> StreakResult<Option<BackupOutcome>> {
        let sentinel = path.join(&self.config.sentinel_file);
        std::fs::write(&sentinel, format!("GitHub streak keeper - {timestamp}\n"))?;

        let committed = self
            .git
            .stage_all(path)
            .and_then(|()| self.git.commit(path, &commit_message(false, timestamp)));

        let reason = match committed {
            Ok(CommitOutcome::Committed) => {
                self.note(name, EntryKind::Info, "Created streak keeper commit")?;
                return Ok(None);
            }
            // e.g. the sentinel is ignored by .gitignore
            Ok(CommitOutcome::NothingToCommit) => "nothing to commit".to_string(),
            Err(e) => e.detail(),
        };

        self.note(
            name,
            EntryKind::Error,
            &format!("Streak keeper commit failed: {reason}"),
        )?;
        Ok(Some(BackupOutcome::failure(false, BackupAction::CommitFailed)))
    }

    /// Record a step in the project log and the diagnostics trace.
    fn note(&self, name: &str, kind: EntryKind, message: &str) -> StreakResult<()> {
        match kind {
            EntryKind::Info => info!("{message}"),
            EntryKind::Error => error!("{message}"),
        }
        self.log.write(name, message, kind)
    }
}
