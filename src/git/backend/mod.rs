// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     .is_repository  .status
//! GitMutation (write) .stage_all  .commit  .push
//!          \              /
//!           GitBackend (both)
//!                |
//!           ShellBackend --> git CLI
//! ```
//!
//! The backup logic only sees the traits, so tests can swap in a recording
//! fake and assert which invocations happened.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, trace};

use super::cmd::{CommitOutcome, classify_commit};
use crate::error::{GitError, StreakResult};

/// Marker entry whose presence makes a directory a repository.
pub const GIT_MARKER: &str = ".git";

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations.
pub trait GitQuery {
    /// Check for the repository marker directly under `path`.
    ///
    /// Never invokes git.
    fn is_repository(&self, path: &Path) -> bool {
        super::query::is_repository(path)
    }

    /// Porcelain status text of the working tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot be run or exits non-zero.
    fn status(&self, path: &Path) -> StreakResult<String>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that modify repository state.
pub trait GitMutation {
    /// Stage everything under the working tree (`git add .`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    fn stage_all(&self, path: &Path) -> StreakResult<()>;

    /// Commit staged changes.
    ///
    /// An empty index is not an error: it is reported as
    /// [`CommitOutcome::NothingToCommit`].
    ///
    /// # Errors
    ///
    /// Returns a `GitError` for any other commit failure.
    fn commit(&self, path: &Path, message: &str) -> StreakResult<CommitOutcome>;

    /// Push the current branch. `None` pushes to the configured upstream.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push is rejected or cannot run.
    fn push(&self, path: &Path, remote: Option<&str>) -> StreakResult<()>;
}

/// Everything a backup needs from git.
pub trait GitBackend: GitQuery + GitMutation {}

impl<T: GitQuery + GitMutation + ?Sized> GitBackend for T {}

/// Captured result of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    /// True if either stream contains `needle`.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.stdout.contains(needle) || self.stderr.contains(needle)
    }

    /// Most useful text to report on failure: stderr, else stdout.
    #[must_use]
    pub fn message(&self) -> &str {
        if self.stderr.is_empty() {
            &self.stdout
        } else {
            &self.stderr
        }
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Git CLI backend.
///
/// Every invocation sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`
/// so a missing credential fails instead of blocking, and `LC_ALL=C` so
/// output text does not depend on the user's locale.
#[derive(Debug, Clone)]
pub struct ShellBackend {
    program: PathBuf,
}

impl ShellBackend {
    /// Locate `git` on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::GitNotFound` if no git executable is found.
    pub fn new() -> StreakResult<Self> {
        let program = which::which("git").map_err(|_| GitError::GitNotFound)?;
        Ok(Self { program })
    }

    /// Use an explicit git executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run git and capture its output. A non-zero exit is not an error here.
    ///
    /// # Errors
    ///
    /// Returns `GitError::SpawnFailed` if the process cannot be started.
    pub fn run(&self, args: &[&str], cwd: &Path) -> StreakResult<GitOutput> {
        let command = format!("git {}", args.join(" "));
        debug!(command = %command, cwd = %cwd.display(), "running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("LC_ALL", "C")
            .output()
            .map_err(|source| GitError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        let result = GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        };
        trace!(
            command = %command,
            code = output.status.code(),
            stdout = %result.stdout,
            stderr = %result.stderr,
            "git finished"
        );
        Ok(result)
    }

    /// Run git, turning a non-zero exit into `GitError::CommandFailed`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if git cannot be spawned or exits non-zero.
    pub fn git_command(&self, args: &[&str], cwd: &Path) -> StreakResult<String> {
        let output = self.run(args, cwd)?;
        if !output.success {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: output.message().to_string(),
            }
            .into());
        }
        Ok(output.stdout)
    }
}

impl GitQuery for ShellBackend {
    fn status(&self, path: &Path) -> StreakResult<String> {
        self.git_command(&["status", "--porcelain"], path)
    }
}

impl GitMutation for ShellBackend {
    fn stage_all(&self, path: &Path) -> StreakResult<()> {
        self.git_command(&["add", "."], path)?;
        Ok(())
    }

    fn commit(&self, path: &Path, message: &str) -> StreakResult<CommitOutcome> {
        let output = self.run(&["commit", "-m", message], path)?;
        classify_commit(&output).map_err(Into::into)
    }

    fn push(&self, path: &Path, remote: Option<&str>) -> StreakResult<()> {
        match remote {
            Some(remote) => self.git_command(&["push", remote], path)?,
            None => self.git_command(&["push"], path)?,
        };
        Ok(())
    }
}
