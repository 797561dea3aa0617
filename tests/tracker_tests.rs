mod common;

use chrono::NaiveDate;
use common::test_dir;
use hourgrid::core::Tracker;
use hourgrid::core::import::ImportLogic;
use hourgrid::db::kv::{PROFILE_KEY, SLOTS_KEY};
use hourgrid::db::{DbPool, KeyValueStore, MemoryStore};
use hourgrid::errors::AppError;
use hourgrid::models::{Hour, ProfileField, Slot, View};
use std::fs;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn h(n: u8) -> Hour {
    Hour::new(n).unwrap()
}

#[test]
fn test_every_mutation_is_written_through() {
    let date = d("2024-03-01");
    let mut tracker = Tracker::load(MemoryStore::new(), View::Day, date).unwrap();

    tracker.toggle_slot(date, h(9), true).unwrap();
    assert!(tracker.store().get(SLOTS_KEY).unwrap().is_some());

    tracker.update_task(date, h(9), "Standup").unwrap();
    tracker.update_duration(date, h(9), "30").unwrap();
    tracker.save_profile(ProfileField::Name, "Ada").unwrap();

    let store = tracker.into_store();
    let reloaded = Tracker::load(store, View::Day, date).unwrap();

    assert_eq!(
        reloaded.slot(date, h(9)),
        Slot {
            checked: true,
            task: "Standup".into(),
            duration: 30
        }
    );
    assert_eq!(reloaded.profile().name, "Ada");
}

#[test]
fn test_load_from_empty_store_gives_defaults() {
    let tracker = Tracker::load(MemoryStore::new(), View::Day, d("2024-03-01")).unwrap();

    assert!(tracker.slots().is_empty());
    assert_eq!(tracker.profile().name, "");
    assert_eq!(tracker.summary().unwrap().total_minutes, 0);
}

#[test]
fn test_load_rejects_corrupt_json() {
    let mut store = MemoryStore::new();
    store.set(SLOTS_KEY, "{not json").unwrap();

    let result = Tracker::load(store, View::Day, d("2024-03-01"));
    assert!(matches!(result, Err(AppError::Json(_))));
}

#[test]
fn test_profile_json_uses_browser_field_names() {
    let mut tracker = Tracker::load(MemoryStore::new(), View::Day, d("2024-03-01")).unwrap();
    tracker.save_profile(ProfileField::Role, "Others").unwrap();
    tracker.save_profile(ProfileField::RoleOther, "Researcher").unwrap();

    let raw = tracker.store().get(PROFILE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["roleOther"], "Researcher");
    assert_eq!(json["role"], "Others");
}

#[test]
fn test_ensure_slot_persists_new_slot() {
    let date = d("2024-03-01");
    let mut tracker = Tracker::load(MemoryStore::new(), View::Day, date).unwrap();

    let slot = tracker.ensure_slot(date, h(13)).unwrap();
    assert_eq!(slot, Slot::touched());

    let reloaded = Tracker::load(tracker.into_store(), View::Day, date).unwrap();
    assert_eq!(reloaded.summary().unwrap().total_minutes, 60);
}

#[test]
fn test_week_view_dates_and_navigation() {
    let mut tracker = Tracker::load(MemoryStore::new(), View::Week, d("2024-01-30")).unwrap();

    let dates = tracker.dates().unwrap();
    assert_eq!(dates.len(), 7);
    assert_eq!(dates[2], d("2024-02-01"));

    tracker.change_week(1).unwrap();
    assert_eq!(tracker.current_date(), d("2024-02-06"));
    tracker.change_week(-2).unwrap();
    assert_eq!(tracker.current_date(), d("2024-01-23"));

    assert_eq!(tracker.column_date(6).unwrap(), d("2024-01-29"));
    assert!(matches!(
        tracker.column_date(7),
        Err(AppError::InvalidDayOffset { .. })
    ));
}

#[test]
fn test_day_view_rejects_other_columns() {
    let tracker = Tracker::load(MemoryStore::new(), View::Day, d("2024-03-01")).unwrap();
    assert_eq!(tracker.dates().unwrap(), vec![d("2024-03-01")]);
    assert_eq!(tracker.column_date(0).unwrap(), d("2024-03-01"));
    assert!(tracker.column_date(1).is_err());
}

#[test]
fn test_week_view_task_clear_removes_from_totals_and_export() {
    let start = d("2024-03-04");
    let mut tracker = Tracker::load(MemoryStore::new(), View::Week, start).unwrap();
    let tuesday = tracker.column_date(1).unwrap();

    tracker.update_task(tuesday, h(10), "Write report").unwrap();
    tracker.update_duration(tuesday, h(10), "40").unwrap();
    assert_eq!(tracker.summary().unwrap().total_minutes, 40);
    assert_eq!(tracker.export_rows().unwrap().len(), 1);

    tracker.update_task(tuesday, h(10), "   ").unwrap();
    assert_eq!(tracker.summary().unwrap().total_minutes, 0);
    assert!(matches!(tracker.export_rows(), Err(AppError::EmptyExport)));
}

#[test]
fn test_sqlite_store_round_trip() {
    let date = d("2024-03-01");
    let pool = DbPool::in_memory().unwrap();
    let mut tracker = Tracker::load(pool, View::Day, date).unwrap();

    tracker.toggle_slot(date, h(9), true).unwrap();
    tracker.toggle_slot(date, h(9), false).unwrap();
    tracker.update_task(date, h(9), "overwritten twice").unwrap();

    let pool = tracker.into_store();
    let raw = pool.get(SLOTS_KEY).unwrap().unwrap();
    assert!(raw.contains("overwritten twice"));

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_import_browser_documents() {
    let dir = test_dir("tracker_import");
    let data = dir.join("data.json");
    let profile = dir.join("profile.json");
    fs::write(
        &data,
        r#"{"2024-03-01":{"9":{"checked":true,"task":"Standup","duration":30},"10":{"checked":false,"task":"","duration":60}}}"#,
    )
    .unwrap();
    fs::write(&profile, r#"{"name":"Ada","role":"Others","roleOther":"Analyst"}"#).unwrap();

    let date = d("2024-03-01");
    let mut tracker = Tracker::load(MemoryStore::new(), View::Day, date).unwrap();
    tracker.update_task(date, h(9), "will be replaced").unwrap();

    let report = ImportLogic::apply(&mut tracker, &data, Some(profile.as_path())).unwrap();

    assert_eq!(report.slots, 2);
    assert_eq!(report.skipped, 0);
    assert!(report.profile);
    assert_eq!(tracker.slot(date, h(9)).task, "Standup");
    assert_eq!(tracker.profile().export_role(), "Analyst");
    assert_eq!(tracker.summary().unwrap().to_string(), "0h 30m");
}

#[test]
fn test_import_null_document_is_empty() {
    let parsed = ImportLogic::parse_slots("null").unwrap();
    assert!(parsed.slots.is_empty());
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn test_import_skips_bad_date_and_hour_keys() {
    let raw = r#"{
        "2024-03-01": {
            "9": {"checked": true, "task": "Standup", "duration": 30},
            "24": {"checked": true, "task": "past midnight", "duration": 60},
            "x": {"checked": true}
        },
        "": {"3": {"checked": true, "task": "no date", "duration": 60}},
        "2024-03-02": {"10": "not a slot", "11": {"checked": true}}
    }"#;

    let parsed = ImportLogic::parse_slots(raw).unwrap();

    assert_eq!(parsed.skipped, 4);
    let date = d("2024-03-01");
    assert_eq!(parsed.slots.slot(date, h(9)).task, "Standup");
    assert_eq!(parsed.slots.slot(date, h(9)).duration, 30);
    assert_eq!(parsed.slots.checked_slots(date).count(), 1);
    assert_eq!(parsed.slots.slot(d("2024-03-02"), h(11)), Slot::touched());
}

#[test]
fn test_import_file_with_empty_date_key_keeps_valid_slots() {
    let dir = test_dir("tracker_import_bad_keys");
    let data = dir.join("data.json");
    fs::write(
        &data,
        r#"{"2024-03-01":{"9":{"checked":true,"task":"Standup","duration":30}},"":{"3":{"checked":true,"task":"","duration":60}}}"#,
    )
    .unwrap();

    let date = d("2024-03-01");
    let mut tracker = Tracker::load(MemoryStore::new(), View::Day, date).unwrap();
    let report = ImportLogic::apply(&mut tracker, &data, None).unwrap();

    assert_eq!(report.slots, 1);
    assert_eq!(report.skipped, 1);
    assert!(!report.profile);
    assert_eq!(tracker.summary().unwrap().total_minutes, 30);
}
