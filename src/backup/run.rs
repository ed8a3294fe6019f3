// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run over all projects.
//!
//! ```text
//! streak = false
//! for project in projects (sorted):
//!     (streak, ok) = backup(project, streak)
//! summary { total, succeeded, streak, failures }
//! ```

use chrono::Local;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

use super::Backer;
use crate::git::backend::GitBackend;
use crate::git::discovery::Project;
use crate::project_log::format_timestamp;

/// Result of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub streak_maintained: bool,
    /// Names of projects whose backup did not succeed, in run order.
    pub failures: Vec<String>,
    pub logs_dir: PathBuf,
    pub completed_at: String,
}

impl RunSummary {
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Console summary block.
    #[must_use]
    pub fn render(&self) -> String {
        let rule = "=".repeat(50);
        let mut out = String::new();
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "BACKUP SUMMARY");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Successful: {}/{}", self.succeeded, self.total);
        let _ = writeln!(
            out,
            "GitHub Streak Maintained: {}",
            if self.streak_maintained { "YES" } else { "NO" }
        );
        if !self.failures.is_empty() {
            let _ = writeln!(out, "Failed: {}", self.failures.join(", "));
        }
        let _ = writeln!(out, "Logs saved in: {}", self.logs_dir.display());
        let _ = write!(out, "Completed at: {}", self.completed_at);
        out
    }
}

/// Back up each project in order, threading the streak flag.
///
/// The flag starts false and, once a push succeeds, stays true for the rest
/// of the run.
pub fn run_backups<G: GitBackend + ?Sized>(
    backer: &Backer<'_, G>,
    projects: &[Project],
) -> RunSummary {
    info!(count = projects.len(), "starting backup run");

    let mut streak_maintained = false;
    let mut succeeded = 0;
    let mut failures = Vec::new();

    for project in projects {
        info!(project = %project.name, path = %project.path.display(), "backing up");
        let was_maintained = streak_maintained;

        let outcome = backer.backup(&project.path, &project.name, streak_maintained);
        let (streak, ok) = outcome.as_pair();
        streak_maintained = streak_maintained || streak;

        if ok {
            succeeded += 1;
        } else {
            failures.push(project.name.clone());
        }

        if streak_maintained && !was_maintained {
            info!("GitHub streak maintained; remaining projects push only actual changes");
        }
    }

    RunSummary {
        total: projects.len(),
        succeeded,
        streak_maintained,
        failures,
        logs_dir: backer.log().dir().to_path_buf(),
        completed_at: format_timestamp(&Local::now()),
    }
}
