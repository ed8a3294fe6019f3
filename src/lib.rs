// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          run / list / log / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, CLI layers   |
//!              '-------------+-------------'
//!                            v
//!                         backup
//!              Backer (one repo), run (all)
//!                  |                  |
//!                  v                  v
//!                 git            project_log
//!        discovery / query /   <name>-backup.yaml
//!        ShellBackend (CLI)
//!
//!   +-----------------------------------------+
//!   |  foundation        error, logging       |
//!   +-----------------------------------------+
//! ```

pub mod backup;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod project_log;
