// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command: back up every project and print the summary.

use anyhow::bail;
use chrono::Local;
use tracing::info;

use crate::backup::Backer;
use crate::backup::run::run_backups;
use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::backend::ShellBackend;
use crate::git::discovery::{Project, discover_projects};
use crate::project_log::{ProjectLog, format_timestamp};

/// Main handler for the run command.
///
/// # Errors
///
/// Returns an error if git is not installed, the base directory cannot be
/// read, an `--only` name matches no project, or any project failed.
pub fn run_backup_command(args: &RunArgs, config: &Config) -> Result<()> {
    let base = config.paths.base()?;
    let logs_dir = config.paths.logs()?;
    let git = ShellBackend::new()?;

    info!(time = %format_timestamp(&Local::now()), "starting auto git backup");
    let projects = select_projects(discover_projects(base, &logs_dir)?, &args.only)?;
    info!(base = %base.display(), "found {} projects to back up", projects.len());

    let log = ProjectLog::new(logs_dir, config.log.rollover);
    let backer = Backer::new(&git, &log, &config.backup);
    let summary = run_backups(&backer, &projects);

    println!("{}", summary.render());

    if !summary.all_succeeded() {
        bail!(
            "{} of {} projects failed",
            summary.failures.len(),
            summary.total
        );
    }
    Ok(())
}

/// Keep only the projects named in `only`; an empty filter keeps all.
///
/// # Errors
///
/// Returns an error naming every entry of `only` that matches no project.
pub fn select_projects(projects: Vec<Project>, only: &[String]) -> Result<Vec<Project>> {
    if only.is_empty() {
        return Ok(projects);
    }

    let unknown: Vec<&str> = only
        .iter()
        .filter(|name| !projects.iter().any(|p| &p.name == *name))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        bail!("unknown project(s): {}", unknown.join(", "));
    }

    Ok(projects
        .into_iter()
        .filter(|p| only.contains(&p.name))
        .collect())
}
