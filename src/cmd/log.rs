// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log command: print a project's backup log for today.

use chrono::Local;

use crate::cli::args::LogArgs;
use crate::config::Config;
use crate::error::Result;
use crate::project_log::{LogEntry, ProjectLog};

/// Main handler for log command.
///
/// # Errors
///
/// Returns an error if the logs directory is not configured or the log
/// cannot be read.
pub fn run_log_command(args: &LogArgs, config: &Config) -> Result<()> {
    let log = ProjectLog::new(config.paths.logs()?, config.log.rollover);
    let today = Local::now().format("%Y-%m-%d").to_string();
    let entries = todays_entries(log.entries(&args.project)?, &today);

    if entries.is_empty() {
        println!("No log entries for '{}' today", args.project);
    } else {
        for entry in &entries {
            println!("{}", format_entry(entry));
        }
    }
    Ok(())
}

/// Entries whose timestamp falls on `day` (`YYYY-MM-DD`).
#[must_use]
pub fn todays_entries(entries: Vec<LogEntry>, day: &str) -> Vec<LogEntry> {
    entries
        .into_iter()
        .filter(|e| e.timestamp.starts_with(day))
        .collect()
}

#[must_use]
pub fn format_entry(entry: &LogEntry) -> String {
    format!("{} [{:<5}] {}", entry.timestamp, entry.kind, entry.message)
}
