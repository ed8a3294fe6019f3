// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Diagnostics logging using the `tracing` ecosystem.
//!
//! This is the operator-facing trace of a run (git invocations, skipped
//! projects, failures). The per-project YAML history that users read lives
//! in [`crate::project_log`].
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! Console   File (optional)
//! EnvFilter EnvFilter
//! ANSI      non_blocking, text or json
//!        |
//!        v
//!    LogGuard (flush on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO
//!            4=DEBUG  5..=6=TRACE
//! ```

use anyhow::Context;
use bon::Builder;
use clap::ValueEnum;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::Result;

/// Diagnostics verbosity (0-6).
///
/// - 0: Off
/// - 1: Error - failed projects only
/// - 2: Warn
/// - 3: Info - default, per-project progress
/// - 4: Debug - every git invocation and its output
/// - 5, 6: Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);

    /// Convert from u8 value, returning None if out of range.
    #[must_use]
    pub const fn from_u8(level: u8) -> Option<Self> {
        if level <= 6 { Some(Self(level)) } else { None }
    }

    /// Convert to `EnvFilter` directive string.
    #[must_use]
    pub const fn to_filter_string(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

/// Line format of the diagnostics file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FileFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::DEBUG)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
    #[builder(setters(name = with_file_format), default)]
    file_format: FileFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn file_format(&self) -> FileFormat {
        self.file_format
    }
}

/// RAII guard that keeps the logging system alive.
/// When dropped, flushes all pending log writes.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system with the given configuration.
///
/// Returns a guard that must be kept alive for the duration of the program.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
///
/// # Example
///
/// ```no_run
/// use streak_rs::logging::{init_logging, LogConfig, LogLevel};
///
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::INFO)
///     .with_log_file("streak.log".to_string())
///     .build();
///
/// let _guard = init_logging(&config).expect("Failed to initialize logging");
/// tracing::info!("Logging initialized");
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_filter = EnvFilter::new(config.console_level().to_filter_string());

    // The summary block already carries a completion time.
    let console_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, file_guard) = if let Some(log_path) = config.log_file() {
        let log_path = Path::new(log_path);

        if let Some(parent) = log_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }

        // Diagnostics accumulate across runs, unlike the daily project logs.
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let file_filter = EnvFilter::new(config.file_level().to_filter_string());

        let layer = match config.file_format() {
            FileFormat::Text => fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(file_filter)
                .boxed(),
            FileFormat::Json => fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(file_filter)
                .boxed(),
        };

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests;
