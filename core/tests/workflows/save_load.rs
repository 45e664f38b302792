// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Save and load workflow tests.
//!
//! These tests write calendars to disk, read them back and check the
//! document on disk stays in the expected layout.

use std::fs;

use moncal_core::{Calendar, Error, EventLog, FileAccessError, MonthContext, persist};

use crate::common::{APRIL_DAYS, april_calendar, april_document, setup_temp_dir, snapshot};

#[test]
fn save_load_round_trip() {
    // Arrange
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.calendar_path();
    let mut log = EventLog::new();
    let calendar = april_calendar(&mut log);

    // Act
    persist::save(&path, &calendar).unwrap();
    let loaded = persist::load(&path, APRIL_DAYS).unwrap();

    // Assert
    assert_eq!(loaded.month(), "April");
    assert_eq!(loaded.year(), 2021);
    assert_eq!(snapshot(&loaded), snapshot(&calendar));
}

#[test]
fn save_load_is_byte_stable() {
    // Arrange
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.calendar_path();
    let mut log = EventLog::new();
    persist::save(&path, &april_calendar(&mut log)).unwrap();
    let first = fs::read_to_string(&path).unwrap();

    // Act
    let loaded = persist::load(&path, APRIL_DAYS).unwrap();
    persist::save(&path, &loaded).unwrap();

    // Assert
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn save_load_existing_document() {
    // Arrange
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.write_calendar(april_document()).unwrap();

    // Act
    let calendar = persist::load_with(&path, |month, year| {
        MonthContext::parse(month, year)
            .map(|ctx| ctx.days_in_month())
            .unwrap_or(31)
    })
    .unwrap();

    // Assert
    assert_eq!(calendar.len(), 2);
    let exams = calendar.find_by_title("Final Exams").unwrap();
    assert_eq!((exams.start_day(), exams.end_day()), (12, 26));

    // Assert - writing it back reproduces the document
    assert_eq!(persist::serialize(&calendar).unwrap(), april_document());
}

#[test]
fn save_load_empty_calendar() {
    // Arrange
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.calendar_path();
    let calendar = Calendar::new("April", 2021);

    // Act
    persist::save(&path, &calendar).unwrap();
    let loaded = persist::load(&path, APRIL_DAYS).unwrap();

    // Assert
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["Events"], serde_json::json!([]));
    assert!(loaded.is_empty());
    assert_eq!(loaded.month(), "April");
    assert_eq!(loaded.year(), 2021);
}

#[test]
fn save_load_loaded_calendar_has_no_audit_trail() {
    // Arrange
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.write_calendar(april_document()).unwrap();

    // Act
    let mut calendar = persist::load(&path, APRIL_DAYS).unwrap();
    let mut log = EventLog::new();
    let id = calendar.resolve("Auditing", None).unwrap().id();
    calendar.delete_event(id, &mut log).unwrap();

    // Assert - only the edit made after loading is recorded
    assert_eq!(log.len(), 1);
}

#[test]
fn load_missing_file() {
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.calendar_path();

    let err = persist::load(&path, APRIL_DAYS).unwrap_err();
    match err {
        Error::FileAccess(FileAccessError::Read { path: p, .. }) => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_malformed_file() {
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir.write_calendar("{\"month\": \"April\"").unwrap();

    let err = persist::load(&path, APRIL_DAYS).unwrap_err();
    assert!(matches!(
        err,
        Error::FileAccess(FileAccessError::Malformed(_))
    ));
}

#[test]
fn load_skips_invalid_entries() {
    let temp_dir = setup_temp_dir().unwrap();
    let path = temp_dir
        .write_calendar(
            r#"{
    "month": "April",
    "year": 2021,
    "Events": [
        {"title": "Final Exams", "start date": 12, "end date": 26, "category": "school"},
        {"title": "Trip", "start date": 3, "end date": 4, "category": "vacation"},
        {"title": "Auditing", "start date": "27", "end date": 27, "category": "work"}
    ]
}"#,
        )
        .unwrap();

    let calendar = persist::load(&path, APRIL_DAYS).unwrap();
    assert_eq!(calendar.len(), 1);
    assert!(calendar.exists_with_title("Final Exams"));
}

#[test]
fn save_into_unwritable_location() {
    let temp_dir = setup_temp_dir().unwrap();
    let blocker = temp_dir.write_calendar("not a directory").unwrap();
    let path = blocker.join("calendar.json");

    let err = persist::save(&path, &Calendar::new("April", 2021)).unwrap_err();
    assert!(matches!(
        err,
        Error::FileAccess(FileAccessError::Write { .. })
    ));
}
