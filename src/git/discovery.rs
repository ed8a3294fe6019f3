// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project discovery.
//!
//! ```text
//! base/
//!   alpha/          (project, repo or not)
//!   beta/           (project)
//!   backup_logs/    (skipped, logs dir)
//!   notes.txt       (skipped, not a directory)
//! ```
//!
//! Returns projects sorted by name for deterministic ordering.

use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A candidate directory under the base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Directory base name; also keys the project log.
    pub name: String,
    pub path: PathBuf,
}

impl Project {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map_or_else(|| "unknown".to_string(), |n| n.to_string_lossy().into_owned());
        Self { name, path }
    }
}

/// List immediate subdirectories of `base`, excluding `logs_dir`.
///
/// Hidden directories are kept: only the logs directory is reserved.
///
/// # Errors
///
/// Returns an error if `base` cannot be read.
pub fn discover_projects(base: &Path, logs_dir: &Path) -> Result<Vec<Project>> {
    let mut projects = Vec::new();

    for entry in
        std::fs::read_dir(base).with_context(|| format!("failed to read {}", base.display()))?
    {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", base.display()))?;
        let path = entry.path();

        if !path.is_dir() || is_same_dir(&path, logs_dir) {
            continue;
        }

        projects.push(Project::new(path));
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

fn is_same_dir(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
