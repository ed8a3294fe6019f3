// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, LogError, StreakError, StreakResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "base".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'base' in section '[paths]'");
}

#[test]
fn test_git_error_wraps_into_streak_error() {
    let err: StreakError = GitError::CommandFailed {
        command: "git push".to_string(),
        message: "rejected".to_string(),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"git error: git command failed: git push - rejected");
}

#[test]
fn test_log_error_wraps_into_streak_error() {
    let err: StreakError = LogError::Write {
        path: "logs/site-backup.yaml".to_string(),
        source: std::io::Error::other("disk full"),
    }
    .into();
    insta::assert_snapshot!(err.to_string(), @"log error: failed to write log 'logs/site-backup.yaml': disk full");
}

#[test]
fn test_streak_error_size() {
    // Every variant is a thin Box, plus discriminant
    let size = std::mem::size_of::<StreakError>();
    assert!(size <= 16, "StreakError is {size} bytes, expected <= 16");
}

#[test]
fn test_streak_result_size() {
    let size = std::mem::size_of::<StreakResult<()>>();
    assert!(size <= 24, "StreakResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_detail_uses_git_output() {
    let err: StreakError = GitError::CommandFailed {
        command: "git push".to_string(),
        message: "fatal: no upstream".to_string(),
    }
    .into();
    assert_eq!(err.detail(), "fatal: no upstream");
    assert_eq!(
        StreakError::from(std::io::Error::other("boom")).detail(),
        "io error: boom"
    );
    assert_eq!(
        StreakError::from(GitError::GitNotFound).detail(),
        "git executable not found (not in PATH)"
    );
}
