// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for streak-rs.

use anyhow::Context;
use serde::Serialize;
use std::path::Path;

use crate::cli::args::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::discovery::discover_projects;
use crate::git::query::is_repository;

/// One row of the project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatus<'a> {
    pub name: &'a str,
    pub path: &'a Path,
    pub repository: bool,
}

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if the base directory cannot be read.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let base = config.paths.base()?;
    let projects = discover_projects(base, &config.paths.logs()?)?;

    let rows: Vec<ProjectStatus<'_>> = projects
        .iter()
        .map(|p| ProjectStatus {
            name: &p.name,
            path: &p.path,
            repository: is_repository(&p.path),
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&rows).context("failed to render projects")?;
        println!("{json}");
        return Ok(());
    }

    if rows.is_empty() {
        println!("No projects found in {}", base.display());
    } else {
        for line in format_rows(&rows) {
            println!("{line}");
        }
    }
    Ok(())
}

/// `name  status` lines, aligned by character count.
#[must_use]
pub fn format_rows(rows: &[ProjectStatus<'_>]) -> Vec<String> {
    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|r| {
            let status = if r.repository {
                "repository"
            } else {
                "not a repository"
            };
            format!("{:<width$}  {status}", r.name)
        })
        .collect()
}
