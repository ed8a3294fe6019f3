// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for streak-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! streak [global options] [command]
//! run [--only NAME]...    (default)
//! list [--json]
//! log PROJECT
//! options
//! inis
//! version
//! ```

pub mod args;
pub mod global;


use crate::cli::args::{ListArgs, LogArgs, RunArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Git Backup Streak Keeper
///
/// Commits and pushes every repository under a base directory, making sure
/// at least one push lands each day.
#[derive(Debug, Parser)]
#[command(
    name = "streak",
    author,
    version,
    about = "Git Backup Streak Keeper",
    long_about = "streak-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Backs up every git repository under a base directory.\n\n\
                  Invoking `streak -d ~/projects` stages, commits and pushes\n\
                  each repository. When nothing changed anywhere, a small\n\
                  keeper file is committed so at least one push happens today.",
    after_help = "CONFIG FILES:\n\n\
                  streak reads `streak.toml` from the current directory if it\n\
                  exists. Additional files can be given with --ini and are\n\
                  loaded after it. STREAK_* environment variables override\n\
                  files (e.g. STREAK_PATHS__BASE=/srv/projects), and command\n\
                  line flags override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Backs up all projects.
    Run(RunArgs),

    /// Lists discovered projects and whether each is a repository.
    List(ListArgs),

    /// Prints today's backup log of a project.
    Log(LogArgs),

    /// Lists all options and their values.
    Options,

    /// Lists the config files used.
    Inis,

    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
