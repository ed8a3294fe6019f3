// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   discovery.rs   query.rs     cmd.rs
//!   projects       changes      commit outcome
//!        \            |            /
//!         v           v           v
//!      ,-------------------------------,
//!      |        backend (traits)       |
//!      |  GitQuery      GitMutation    |
//!      '---------------+---------------'
//!                      |
//!                      v
//!                ShellBackend
//!             status / add / commit / push
//! ```

pub mod backend;
pub mod cmd;
pub mod discovery;
pub mod query;
