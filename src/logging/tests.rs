// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{FileFormat, LogConfig, LogLevel};

#[test]
fn test_log_level_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(
        filters,
        ["off", "error", "warn", "info", "debug", "trace", "trace"]
    );
}

#[test]
fn test_log_level_rejects_out_of_range() {
    assert!(LogLevel::from_u8(7).is_none());
    assert!(LogLevel::from_u8(u8::MAX).is_none());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::DEBUG);
    assert_eq!(config.file_format(), FileFormat::Text);
    assert!(config.log_file().is_none());
}

#[test]
fn test_log_config_builder_overrides() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::from_u8(1).expect("valid level"))
        .with_log_file("logs/streak.log".to_string())
        .with_file_format(FileFormat::Json)
        .build();
    assert_eq!(config.console_level().to_filter_string(), "error");
    assert_eq!(config.log_file(), Some("logs/streak.log"));
    assert_eq!(config.file_format(), FileFormat::Json);
}
