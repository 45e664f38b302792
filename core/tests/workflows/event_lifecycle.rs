// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests follow events from creation through lookup, editing and
//! deletion, checking the audit trail left behind at every step.

use moncal_core::{
    Calendar, Category, Error, Event, EventLog, EventPatch, InvalidDates, validate_category,
    validate_date_range,
};

use crate::common::{APRIL_DAYS, april_calendar, snapshot};

#[test]
fn event_lifecycle_create_and_find() {
    // Arrange
    let mut log = EventLog::new();
    let mut calendar = Calendar::new("April", 2021);

    // Act
    let exams = Event::new("Final Exams", 12, 26, "school", APRIL_DAYS).unwrap();
    calendar.add_event(exams, &mut log);
    let audit = Event::new("Auditing", 27, 27, "work", APRIL_DAYS).unwrap();
    calendar.add_event(audit, &mut log);

    // Assert
    let found = calendar.find_by_title("Final Exams").unwrap();
    assert_eq!(found.start_day(), 12);
    assert_eq!(found.end_day(), 26);
    assert!(!calendar.has_duplicate_title("Final Exams"));
    assert!(calendar.exists_with_title("Auditing"));
    assert_eq!(log.len(), 2);
}

#[test]
fn event_lifecycle_duplicate_titles() {
    // Arrange
    let mut log = EventLog::new();
    let mut calendar = Calendar::new("April", 2021);
    let first = Event::new("Event A", 3, 9, "family", APRIL_DAYS).unwrap();
    let second = Event::new("Event A", 13, 13, "friends", APRIL_DAYS).unwrap();
    let first = calendar.add_event(first, &mut log);
    let second = calendar.add_event(second, &mut log);

    // Assert - duplicates are detected and told apart by range
    assert!(calendar.has_duplicate_title("Event A"));
    assert!(calendar.find_by_title("Event A").is_none());
    assert_eq!(
        calendar.find_by_title_and_range("Event A", 3, 9).unwrap().id(),
        first
    );
    assert_eq!(
        calendar
            .find_by_title_and_range("Event A", 13, 13)
            .unwrap()
            .id(),
        second
    );

    // Act - delete one of them by identity
    calendar.delete_event(first, &mut log).unwrap();

    // Assert - the survivor is now unique
    assert!(!calendar.has_duplicate_title("Event A"));
    assert_eq!(calendar.find_by_title("Event A").unwrap().id(), second);
}

#[test]
fn event_lifecycle_edit_flow() {
    // Arrange
    let mut log = EventLog::new();
    let mut calendar = april_calendar(&mut log);
    let id = calendar.resolve("Birthday Party", None).unwrap().id();

    // Act
    let patch = EventPatch {
        title: Some("Surprise Party".to_string()),
        days: Some((14, 15)),
        category: Some(Category::Family),
    };
    let updated = calendar
        .update_event(id, &patch, APRIL_DAYS, &mut log)
        .unwrap();

    // Assert
    assert_eq!(updated.title(), "Surprise Party");
    assert_eq!(updated.days(), &[14, 15]);
    assert_eq!(updated.category(), Category::Family);
    assert!(!calendar.exists_with_title("Birthday Party"));

    let descriptions: Vec<_> = log
        .entries()
        .skip(5)
        .map(|e| e.description().to_string())
        .collect();
    assert_eq!(
        descriptions,
        [
            "Event titled Birthday Party: start day changed to 14 and end day changed to 15",
            "Event titled Birthday Party: category changed from friends to family",
            "Event title changed from Birthday Party to Surprise Party",
        ]
    );
}

#[test]
fn event_lifecycle_rejected_edit_keeps_state() {
    // Arrange
    let mut log = EventLog::new();
    let mut calendar = april_calendar(&mut log);
    let before = snapshot(&calendar);
    let id = calendar.resolve("Auditing", None).unwrap().id();

    // Act
    let patch = EventPatch {
        title: Some("Audit".to_string()),
        days: Some((27, 31)),
        ..Default::default()
    };
    let err = calendar
        .update_event(id, &patch, APRIL_DAYS, &mut log)
        .unwrap_err();

    // Assert
    assert!(matches!(
        err,
        Error::InvalidDates(InvalidDates::DateExceedsMonth {
            day: 31,
            max_day: 30
        })
    ));
    assert_eq!(snapshot(&calendar), before);
    assert_eq!(log.len(), 5);
}

#[test]
fn event_lifecycle_delete_flow() {
    // Arrange
    let mut log = EventLog::new();
    let mut calendar = april_calendar(&mut log);
    let id = calendar.resolve("Weekend Road trip", None).unwrap().id();

    // Act
    let removed = calendar.delete_event(id, &mut log).unwrap();

    // Assert
    assert_eq!(removed.title(), "Weekend Road trip");
    assert_eq!(calendar.len(), 4);
    assert!(!calendar.contains(&removed));
    assert_eq!(
        log.entries().last().unwrap().description(),
        "Event titled Weekend Road trip on days 3 to 4 deleted from the calendar"
    );

    // Act - deleting again is a no-op failure
    let err = calendar.delete_event(id, &mut log).unwrap_err();

    // Assert
    assert!(matches!(err, Error::EventNotFound));
    assert_eq!(calendar.len(), 4);
    assert_eq!(log.len(), 6);
}

#[test]
fn event_lifecycle_events_on_day() {
    let mut log = EventLog::new();
    let calendar = april_calendar(&mut log);

    let titles: Vec<_> = calendar.events_on_day(19).map(Event::title).collect();
    assert_eq!(titles, ["Final Exams", "Dentist Appointment"]);

    let titles: Vec<_> = calendar.events_on_day(4).map(Event::title).collect();
    assert_eq!(titles, ["Weekend Road trip"]);
}

#[test]
fn event_lifecycle_audit_entries_in_order() {
    let mut log = EventLog::new();
    let _calendar = april_calendar(&mut log);

    let descriptions: Vec<_> = log.entries().map(|e| e.description().to_string()).collect();
    assert_eq!(
        descriptions[0],
        "Event titled Final Exams added to the calendar for days 12 to 26"
    );
    assert_eq!(
        descriptions[4],
        "Event titled Dentist Appointment added to the calendar for days 19 to 19"
    );

    let entries = log.entries();
    let timestamps: Vec<_> = entries.clone().map(|e| e.timestamp()).collect();
    assert_eq!(timestamps.len(), entries.len());
}

#[test]
fn validation_accepts_every_range_in_the_month() {
    for max_day in [28, 29, 30, 31] {
        for start in 1..=max_day {
            for end in start..=max_day {
                assert!(validate_date_range(start, end, max_day).is_ok());
                let event = Event::new("x", start, end, "work", max_day).unwrap();
                assert_eq!(event.days(), (start..=end).collect::<Vec<_>>().as_slice());
            }
        }
    }
}

#[test]
fn validation_rejects_reversed_and_overlong_ranges() {
    for max_day in [28, 31] {
        assert_eq!(
            validate_date_range(10, 9, max_day),
            Err(InvalidDates::StartAfterEnd { start: 10, end: 9 })
        );
        assert!(matches!(
            validate_date_range(max_day, max_day + 1, max_day),
            Err(InvalidDates::DateExceedsMonth { .. })
        ));
    }
}

#[test]
fn validation_categories() {
    for name in ["school", "work", "family", "friends", "personal"] {
        assert_eq!(validate_category(name).unwrap().as_ref(), name);
    }
    for name in ["", "School", "holiday", " work"] {
        assert!(validate_category(name).is_err());
    }
}
