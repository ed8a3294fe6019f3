// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository probing.
//!
//! ```text
//! is_repository  path/.git exists        (no subprocess)
//! get_changes    git status --porcelain  (failure reads as "no changes")
//! ```

use std::path::Path;
use tracing::debug;

use super::backend::{GIT_MARKER, GitQuery};

/// True iff the repository marker exists directly under `path`.
#[must_use]
pub fn is_repository(path: &Path) -> bool {
    path.join(GIT_MARKER).exists()
}

/// Pending changes in the working tree, if any.
///
/// A failing status query is indistinguishable from a clean tree here: both
/// return `None`. The failure is only visible in debug diagnostics.
pub fn get_changes<Q: GitQuery + ?Sized>(git: &Q, path: &Path) -> Option<String> {
    match git.status(path) {
        Ok(status) => {
            let status = status.trim();
            (!status.is_empty()).then(|| status.to_string())
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "status query failed, treating as clean");
            None
        }
    }
}
