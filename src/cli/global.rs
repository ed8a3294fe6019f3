// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE          ← Additional config files (can repeat)
//! --base-dir DIR      ← paths.base override
//! --logs-dir DIR      ← paths.logs override
//! --log-level N       ← Console verbosity (0-6)
//! --file-log-level N  ← File verbosity (defaults to --log-level)
//! --log-file FILE     ← Diagnostics file
//!
//! Precedence: CLI flags > STREAK_* env > --ini > streak.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::logging::FileFormat;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Directory whose subdirectories are backed up.
    #[arg(short = 'd', long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Directory for per-project backup logs (relative to the base directory).
    #[arg(long = "logs-dir", value_name = "DIR")]
    pub logs_dir: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub file_log_level: Option<u8>,

    /// Path to diagnostics log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Line format of the diagnostics log file.
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value = "text")]
    pub log_format: FileFormat,
}

impl GlobalOptions {
    /// Command-line options as `(key, value)` configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(ref base) = self.base_dir {
            overrides.push(("paths.base", base.display().to_string()));
        }

        if let Some(ref logs) = self.logs_dir {
            overrides.push(("paths.logs", logs.display().to_string()));
        }

        overrides
    }
}
