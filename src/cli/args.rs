// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command arguments.

use clap::Args;

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Only back up the named project. Can be specified multiple times.
    #[arg(long = "only", value_name = "NAME", action = clap::ArgAction::Append)]
    pub only: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints projects as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `log` command.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Project name (directory name under the base directory).
    #[arg(value_name = "PROJECT")]
    pub project: String,
}
