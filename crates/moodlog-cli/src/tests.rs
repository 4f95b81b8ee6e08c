//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::path::Path;

use chrono::Duration;
use moodlog_core::test_utils::{at, at_time};
use moodlog_core::{Config, MoodHistoryStore, MoodLevel, StorageBackend};

use crate::commands;

fn json_config(dir: &Path) -> Config {
    Config {
        backend: StorageBackend::Json,
        store_path: Some(dir.join("moodlog.json")),
        ..Config::default()
    }
}

fn sqlite_config(dir: &Path) -> Config {
    Config {
        backend: StorageBackend::Sqlite,
        store_path: Some(dir.join("data").join("moodlog.db")),
        ..Config::default()
    }
}

fn stored_history(config: &Config) -> Vec<moodlog_core::MoodRecord> {
    MoodHistoryStore::open(commands::open_slot(config).unwrap()).history()
}

// ========== Config Tests ==========

#[test]
fn test_resolve_config_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = commands::resolve_config(
        Some(&dir.path().join("missing.toml")),
        Some(dir.path().join("custom.json")),
        Some("json"),
    )
    .unwrap();

    assert_eq!(config.backend, StorageBackend::Json);
    assert_eq!(config.resolved_store_path(), dir.path().join("custom.json"));
}

#[test]
fn test_resolve_config_bad_backend() {
    let dir = tempfile::tempdir().unwrap();
    let result =
        commands::resolve_config(Some(&dir.path().join("missing.toml")), None, Some("redis"));
    assert!(result.is_err());
}

// ========== Check-in Command Tests ==========

#[test]
fn test_cmd_checkin_by_value() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());

    let result = commands::cmd_checkin(&config, "4", false, at(2026, 10, 17));
    assert!(result.is_ok());

    let history = stored_history(&config);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].level, MoodLevel::Good);
}

#[test]
fn test_cmd_checkin_by_label_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(dir.path());

    commands::cmd_checkin(&config, "great", false, at(2026, 10, 17)).unwrap();

    let history = stored_history(&config);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].level, MoodLevel::Great);
}

#[test]
fn test_cmd_checkin_invalid_mood() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());

    let result = commands::cmd_checkin(&config, "9", false, at(2026, 10, 17));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid mood"));
    assert!(stored_history(&config).is_empty());
}

#[test]
fn test_cmd_checkin_twice_requires_update() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());

    commands::cmd_checkin(&config, "2", false, at_time(2026, 10, 17, 9, 0)).unwrap();

    let result = commands::cmd_checkin(&config, "5", false, at_time(2026, 10, 17, 18, 0));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("--update"));
    assert_eq!(stored_history(&config)[0].value(), 2);

    commands::cmd_checkin(&config, "5", true, at_time(2026, 10, 17, 18, 0)).unwrap();
    let history = stored_history(&config);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].value(), 5);
}

#[test]
fn test_cmd_checkin_next_day_appends() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());
    let day1 = at(2026, 10, 16);

    commands::cmd_checkin(&config, "3", false, day1).unwrap();
    commands::cmd_checkin(&config, "4", false, day1 + Duration::days(1)).unwrap();

    assert_eq!(stored_history(&config).len(), 2);
}

#[test]
fn test_cmd_today() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());
    let now = at(2026, 10, 17);

    assert!(commands::cmd_today(&config, now).is_ok());
    commands::cmd_checkin(&config, "okay", false, now).unwrap();
    assert!(commands::cmd_today(&config, now).is_ok());
}

#[test]
fn test_cmd_moods() {
    assert!(commands::cmd_moods().is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_summary_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());

    assert!(commands::cmd_summary(&config, false, at(2026, 10, 17)).is_ok());
    assert!(commands::cmd_summary(&config, true, at(2026, 10, 17)).is_ok());
}

#[test]
fn test_cmd_summary_with_data() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(dir.path());
    let start = at(2026, 10, 11);

    for (i, mood) in ["1", "1", "1", "5", "5", "5"].iter().enumerate() {
        commands::cmd_checkin(&config, mood, false, start + Duration::days(i as i64)).unwrap();
    }

    let today = start + Duration::days(5);
    assert!(commands::cmd_summary(&config, false, today).is_ok());
    assert!(commands::cmd_summary(&config, true, today).is_ok());
}

#[test]
fn test_cmd_history() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());
    let now = at(2026, 10, 17);

    assert!(commands::cmd_history(&config, false, now).is_ok());
    commands::cmd_checkin(&config, "low", false, now).unwrap();
    assert!(commands::cmd_history(&config, false, now).is_ok());
    assert!(commands::cmd_history(&config, true, now).is_ok());
}

#[test]
fn test_cmd_suggest() {
    let dir = tempfile::tempdir().unwrap();
    let config = json_config(dir.path());
    let now = at(2026, 10, 17);

    assert!(commands::cmd_suggest(&config, None, None, false, now).is_ok());
    assert!(commands::cmd_suggest(&config, Some("5"), Some(2), true, now).is_ok());
    assert!(commands::cmd_suggest(&config, Some("nope"), None, false, now).is_err());

    commands::cmd_checkin(&config, "sad", false, now).unwrap();
    assert!(commands::cmd_suggest(&config, None, None, false, now).is_ok());
}

#[test]
fn test_cmd_status() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(dir.path());

    assert!(commands::cmd_status(&config).is_ok());
    commands::cmd_checkin(&config, "4", false, at(2026, 10, 17)).unwrap();
    assert!(commands::cmd_status(&config).is_ok());
}

#[test]
fn test_corrupt_sqlite_store_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(dir.path());
    let db_path = config.resolved_store_path();
    std::fs::create_dir_all(db_path.parent().unwrap()).unwrap();
    std::fs::write(&db_path, "not a sqlite database ".repeat(64)).unwrap();
    let now = at(2026, 10, 17);

    assert!(commands::cmd_status(&config).is_ok());
    assert!(commands::cmd_today(&config, now).is_ok());
    assert!(commands::cmd_summary(&config, false, now).is_ok());
    // Recorded in memory; the save warning is printed, not returned
    assert!(commands::cmd_checkin(&config, "4", false, now).is_ok());
    assert!(stored_history(&config).is_empty());
}
