// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       StreakError (16 bytes)
//!              |
//!   +------+---+---+------+
//!   |      |       |      |
//!   v      v       v      v
//!  Git   Config   Log    Io
//!  Box    Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Git     CommandFailed, SpawnFailed, GitNotFound
//!   Config  ParseError, MissingKey, InvalidValue
//!   Log     Read, Write, Serialize
//!
//! All variants boxed => StreakError is one pointer plus a tag.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`StreakError`].
pub type StreakResult<T> = std::result::Result<T, StreakError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum StreakError {
    /// Git invocation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Project log could not be read or written.
    #[error("log error: {0}")]
    Log(#[from] Box<LogError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl StreakError {
    /// Git's own output for a failed git command, otherwise the full message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Git(err) => match err.as_ref() {
                GitError::CommandFailed { message, .. } => message.clone(),
                err => err.to_string(),
            },
            err => err.to_string(),
        }
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for StreakError {
                fn from(err: $error) -> Self {
                    StreakError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    LogError => Log,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git invocation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git exited with a non-zero status.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Git could not be started at all.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// No git executable on PATH.
    #[error("git executable not found (not in PATH)")]
    GitNotFound,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Project Log Errors ---

/// Errors from the per-project YAML log.
#[derive(Debug, Error)]
pub enum LogError {
    /// Failed to read an existing log file.
    #[error("failed to read log '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the log file.
    #[error("failed to write log '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to render the log document.
    #[error("failed to serialize log '{path}': {source}")]
    Serialize {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
