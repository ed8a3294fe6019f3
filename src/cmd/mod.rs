// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   run, list, log, config (options / inis)
//! ```

pub mod config;
pub mod list;
pub mod log;
pub mod run;
