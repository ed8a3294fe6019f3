// streak-rs: Git Backup Streak Keeper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EntryKind, ProjectLog, format_timestamp};
use crate::config::types::RolloverKey;
use chrono::{Duration, Local, TimeZone};
use std::time::SystemTime;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn messages(log: &ProjectLog, project: &str) -> Vec<String> {
    log.entries(project)
        .expect("log should be readable")
        .into_iter()
        .map(|e| e.message)
        .collect()
}

#[test]
fn test_first_write_creates_log_and_directory() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path().join("backup_logs"), RolloverKey::Modified);

    log.write("dotfiles", "Not a git repository", EntryKind::Error)
        .expect("write should succeed");

    let path = log.path_for("dotfiles");
    assert!(path.ends_with("backup_logs/dotfiles-backup.yaml"));
    let entries = log.entries("dotfiles").expect("readable");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].kind, EntryKind::Error);
    assert_eq!(entries[0].project, "dotfiles");
    assert_eq!(entries[0].message, "Not a git repository");
}

#[test]
fn test_same_day_writes_append_in_order() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);

    for message in ["first", "second", "third"] {
        log.write("site", message, EntryKind::Info).expect("write");
    }

    assert_eq!(messages(&log, "site"), ["first", "second", "third"]);
}

#[test]
fn test_projects_have_separate_logs() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);

    log.write("a", "for a", EntryKind::Info).expect("write");
    log.write("b", "for b", EntryKind::Info).expect("write");

    assert_eq!(messages(&log, "a"), ["for a"]);
    assert_eq!(messages(&log, "b"), ["for b"]);
    assert!(messages(&log, "c").is_empty());
}

#[test]
fn test_document_layout() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);
    let now = Local
        .with_ymd_and_hms(2026, 10, 18, 9, 30, 0)
        .single()
        .expect("valid local time");

    log.write_at("notes", "Git add completed", EntryKind::Info, now)
        .expect("write");

    let text = std::fs::read_to_string(log.path_for("notes")).expect("read back");
    insta::assert_snapshot!(text.trim_end(), @r"
    backup_logs:
    - timestamp: 2026-10-18 09:30:00
      type: INFO
      project: notes
      message: Git add completed
    ");
}

#[test]
fn test_modified_rollover_keeps_only_new_day() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);

    log.write("site", "yesterday's entry", EntryKind::Info).expect("write");

    // Age the file by two days.
    let aged = SystemTime::now() - std::time::Duration::from_secs(2 * 24 * 60 * 60);
    std::fs::File::options()
        .write(true)
        .open(log.path_for("site"))
        .and_then(|f| f.set_modified(aged))
        .expect("failed to age log file");

    log.write("site", "today's entry", EntryKind::Info).expect("write");
    assert_eq!(messages(&log, "site"), ["today's entry"]);
}

#[test]
fn test_modified_rollover_by_clock() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);

    log.write("site", "day one", EntryKind::Info).expect("write");
    log.write_at("site", "day two", EntryKind::Error, Local::now() + Duration::days(1))
        .expect("write");

    let entries = log.entries("site").expect("readable");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "day two");
    assert_eq!(entries[0].kind, EntryKind::Error);
}

#[test]
fn test_last_entry_rollover_ignores_file_time() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::LastEntry);
    let yesterday = Local::now() - Duration::days(1);

    // File is written today, but its only entry is from yesterday.
    log.write_at("site", "old", EntryKind::Info, yesterday)
        .expect("write");
    log.write("site", "new", EntryKind::Info).expect("write");

    assert_eq!(messages(&log, "site"), ["new"]);
}

#[test]
fn test_last_entry_rollover_keeps_same_day_even_if_touched() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::LastEntry);

    log.write("site", "morning", EntryKind::Info).expect("write");
    let aged = SystemTime::now() - std::time::Duration::from_secs(3 * 24 * 60 * 60);
    std::fs::File::options()
        .write(true)
        .open(log.path_for("site"))
        .and_then(|f| f.set_modified(aged))
        .expect("failed to age log file");
    log.write("site", "evening", EntryKind::Info).expect("write");

    assert_eq!(messages(&log, "site"), ["morning", "evening"]);
}

#[test]
fn test_malformed_log_is_treated_as_empty() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);
    std::fs::write(log.path_for("site"), "backup_logs: [unterminated\n::: nonsense")
        .expect("failed to write garbage");

    assert!(log.entries("site").expect("garbage reads as empty").is_empty());
    log.write("site", "recovered", EntryKind::Info).expect("write");
    assert_eq!(messages(&log, "site"), ["recovered"]);
}

#[test]
fn test_empty_log_file_is_treated_as_empty() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);
    std::fs::write(log.path_for("site"), "").expect("failed to create empty file");

    log.write("site", "first real entry", EntryKind::Info).expect("write");
    assert_eq!(messages(&log, "site"), ["first real entry"]);
}

#[test]
fn test_entry_kind_serialization() {
    assert_eq!(EntryKind::Info.to_string(), "INFO");
    assert_eq!(EntryKind::Error.to_string(), "ERROR");
}

#[test]
fn test_format_timestamp() {
    let time = Local
        .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
        .single()
        .expect("valid local time");
    assert_eq!(format_timestamp(&time), "2026-01-02 03:04:05");
}

#[test]
fn test_non_utf8_log_is_treated_as_empty() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);
    std::fs::write(log.path_for("site"), [0xff, 0xfe, b'\n', 0x80])
        .expect("failed to write binary garbage");

    assert!(log.entries("site").expect("binary reads as empty").is_empty());
    log.write("site", "recovered", EntryKind::Info).expect("write");
    assert_eq!(messages(&log, "site"), ["recovered"]);
}

#[test]
fn test_non_utf8_log_with_last_entry_rollover() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::LastEntry);
    std::fs::write(log.path_for("site"), [0xff, 0xfe, b'\n', 0x80])
        .expect("failed to write binary garbage");

    log.write("site", "recovered", EntryKind::Info).expect("write");
    assert_eq!(messages(&log, "site"), ["recovered"]);
}

#[test]
fn test_stale_unreadable_log_is_replaced() {
    let temp = temp_dir();
    let log = ProjectLog::new(temp.path(), RolloverKey::Modified);
    let path = log.path_for("site");
    std::fs::write(&path, [0xff, 0xfe, b'\n', 0x80]).expect("failed to write binary garbage");

    let aged = SystemTime::now() - std::time::Duration::from_secs(2 * 24 * 60 * 60);
    std::fs::File::options()
        .write(true)
        .open(&path)
        .and_then(|f| f.set_modified(aged))
        .expect("failed to age log file");

    log.write("site", "fresh day", EntryKind::Info).expect("write");
    assert_eq!(messages(&log, "site"), ["fresh day"]);
}
