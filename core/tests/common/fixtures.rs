// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use moncal_core::{Calendar, Category, Event, EventLog};

/// Number of days in April.
pub const APRIL_DAYS: u32 = 30;

/// Creates the April 2021 calendar used across the workflow tests.
///
/// The events are added through `log`, so it holds one entry per event.
pub fn april_calendar(log: &mut EventLog) -> Calendar {
    let mut calendar = Calendar::new("April", 2021);
    for (title, start, end, category) in [
        ("Final Exams", 12, 26, "school"),
        ("Auditing", 27, 27, "work"),
        ("Weekend Road trip", 3, 4, "family"),
        ("Birthday Party", 13, 13, "friends"),
        ("Dentist Appointment", 19, 19, "personal"),
    ] {
        let event = Event::new(title, start, end, category, APRIL_DAYS).unwrap();
        calendar.add_event(event, log);
    }
    calendar
}

/// A saved April 2021 document with two events.
pub fn april_document() -> &'static str {
    r#"{
    "month": "April",
    "year": 2021,
    "Events": [
        {
            "title": "Final Exams",
            "start date": 12,
            "end date": 26,
            "category": "school"
        },
        {
            "title": "Auditing",
            "start date": 27,
            "end date": 27,
            "category": "work"
        }
    ]
}"#
}

/// The observable fields of every event, in order.
pub fn snapshot(calendar: &Calendar) -> Vec<(String, u32, u32, Category)> {
    calendar
        .events()
        .iter()
        .map(|e| (e.title().to_string(), e.start_day(), e.end_day(), e.category()))
        .collect()
}
