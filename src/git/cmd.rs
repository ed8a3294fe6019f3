// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit result classification.
//!
//! ```text
//! git commit exit 0                    --> Committed
//! exit != 0, "nothing to commit" seen  --> NothingToCommit
//! exit != 0, anything else             --> GitError::CommandFailed
//! ```
//!
//! The text check relies on git's English output; the shell backend pins
//! `LC_ALL=C` for that reason.

use super::backend::GitOutput;
use crate::error::GitError;

/// Phrase git prints when the index matches HEAD.
pub const NOTHING_TO_COMMIT: &str = "nothing to commit";

/// Successful outcomes of `git commit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new commit was created.
    Committed,
    /// The index was clean, so git refused to create a commit.
    NothingToCommit,
}

/// Classify the captured output of `git commit`.
///
/// # Errors
///
/// Returns `GitError::CommandFailed` when the commit failed for any reason
/// other than an empty index.
pub fn classify_commit(output: &GitOutput) -> Result<CommitOutcome, GitError> {
    if output.success {
        Ok(CommitOutcome::Committed)
    } else if output.mentions(NOTHING_TO_COMMIT) {
        Ok(CommitOutcome::NothingToCommit)
    } else {
        Err(GitError::CommandFailed {
            command: "git commit".to_string(),
            message: output.message().to_string(),
        })
    }
}
