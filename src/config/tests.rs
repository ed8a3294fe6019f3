// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use super::paths::{DEFAULT_LOGS_DIR, PathsConfig};
use super::types::{BackupConfig, DEFAULT_SENTINEL_FILE, RolloverKey};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.paths.base.is_none());
    assert_eq!(config.backup, BackupConfig::default());
    assert_eq!(config.backup.sentinel_file, DEFAULT_SENTINEL_FILE);
    assert_eq!(config.log.rollover, RolloverKey::Modified);
}

#[test]
fn test_parse_minimal_resolves_logs_under_base() {
    let config = Config::parse(
        r#"
        [paths]
        base = "/srv/projects"
        "#,
    )
    .expect("minimal config should parse");

    assert_eq!(config.paths.base, Some(PathBuf::from("/srv/projects")));
    assert_eq!(
        config.paths.logs,
        Some(PathBuf::from("/srv/projects").join(DEFAULT_LOGS_DIR))
    );
}

#[test]
fn test_parse_full_config() {
    let config = Config::parse(
        r#"
        [paths]
        base = "/srv/projects"
        logs = "/var/log/streak"

        [backup]
        sentinel_file = "keepalive.txt"
        remote = "backup"

        [log]
        rollover = "last-entry"
        "#,
    )
    .expect("full config should parse");

    assert_eq!(config.paths.logs, Some(PathBuf::from("/var/log/streak")));
    assert_eq!(config.backup.sentinel_file, "keepalive.txt");
    assert_eq!(config.backup.remote.as_deref(), Some("backup"));
    assert_eq!(config.log.rollover, RolloverKey::LastEntry);
}

#[test]
fn test_relative_logs_dir_resolves_against_base() {
    let config = Config::parse(
        r#"
        [paths]
        base = "/srv/projects"
        logs = "history"
        "#,
    )
    .expect("config should parse");

    assert_eq!(
        config.paths.logs,
        Some(PathBuf::from("/srv/projects/history"))
    );
}

#[test]
fn test_missing_base_is_an_error() {
    let err = Config::parse("[backup]\nremote = \"origin\"\n").unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("paths"), "unexpected error: {msg}");
    assert!(msg.contains("base"), "unexpected error: {msg}");
}

#[test]
fn test_sentinel_must_be_plain_file_name() {
    let err = Config::parse(
        r#"
        [paths]
        base = "/srv/projects"

        [backup]
        sentinel_file = "nested/keeper.txt"
        "#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("sentinel_file"));
}

#[test]
fn test_empty_remote_is_rejected() {
    let err = Config::parse(
        r#"
        [paths]
        base = "/srv/projects"

        [backup]
        remote = ""
        "#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("remote"));
}

#[test]
fn test_unknown_fields_are_rejected() {
    let result = Config::parse(
        r#"
        [paths]
        base = "/srv/projects"
        prefix = "/old/key"
        "#,
    );
    assert!(result.is_err(), "unknown keys should not be silently ignored");
}

#[test]
fn test_cli_override_wins_over_file() {
    let config = Config::builder()
        .add_toml_str("[paths]\nbase = \"/from/file\"\n")
        .set("paths.base", "/from/cli")
        .expect("override key is valid")
        .build()
        .expect("config should build");

    assert_eq!(config.paths.base, Some(PathBuf::from("/from/cli")));
}

#[test]
fn test_paths_logs_without_resolve() {
    let paths = PathsConfig {
        base: Some(PathBuf::from("/data")),
        logs: None,
    };
    assert_eq!(
        paths.logs().expect("base is set"),
        PathBuf::from("/data").join(DEFAULT_LOGS_DIR)
    );
    assert!(PathsConfig::default().logs().is_err());
}

#[test]
fn test_format_options() {
    let config = Config::parse("[paths]\nbase = \"/srv/projects\"\n").expect("config should parse");
    let lines = config.format_options();
    insta::assert_snapshot!(lines.join("\n"), @r"
    backup.remote        = (upstream)
    backup.sentinel_file = github_streak_keeper.txt
    log.rollover         = modified
    paths.base           = /srv/projects
    paths.logs           = /srv/projects/backup_logs
    ");
}

#[test]
fn test_relative_base_is_made_absolute() {
    let config = Config::parse("[paths]\nbase = \"projects\"\n").expect("config should parse");
    let cwd = std::env::current_dir().expect("current dir");

    let base = config.paths.base().expect("base is set");
    assert!(base.is_absolute());
    assert_eq!(base, cwd.join("projects"));
    assert_eq!(
        config.paths.logs().expect("logs resolved"),
        cwd.join("projects").join(DEFAULT_LOGS_DIR)
    );
}

#[test]
fn test_relative_base_and_logs_resolve_once() {
    let config = Config::parse("[paths]\nbase = \"projects\"\nlogs = \"history\"\n")
        .expect("config should parse");
    let logs = config.paths.logs().expect("logs resolved");

    assert!(logs.ends_with("projects/history"), "{}", logs.display());
    assert!(!logs.to_string_lossy().contains("projects/projects"));
}
