// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Reading and writing calendars as JSON.
//!
//! The document layout is fixed for compatibility with existing save files:
//!
//! ```json
//! {
//!     "month": "April",
//!     "year": 2021,
//!     "Events": [
//!         {
//!             "title": "Final Exams",
//!             "start date": 12,
//!             "end date": 26,
//!             "category": "school"
//!         }
//!     ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::{Calendar, Category, Error, Event, FileAccessError};

const INDENT: &[u8] = b"    ";

#[derive(Debug, Serialize)]
struct CalendarDocumentRef<'a> {
    month: &'a str,
    year: i32,
    #[serde(rename = "Events")]
    events: Vec<EventRecordRef<'a>>,
}

#[derive(Debug, Serialize)]
struct EventRecordRef<'a> {
    title: &'a str,
    #[serde(rename = "start date")]
    start_day: u32,
    #[serde(rename = "end date")]
    end_day: u32,
    category: Category,
}

#[derive(Debug, Deserialize)]
struct CalendarDocument {
    month: String,
    year: i32,
    // entries are decoded one by one so a broken entry only loses itself
    #[serde(rename = "Events", alias = "events")]
    events: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EventRecord {
    title: String,
    #[serde(rename = "start date")]
    start_day: u32,
    #[serde(rename = "end date")]
    end_day: u32,
    category: String,
}

impl<'a> From<&'a Event> for EventRecordRef<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            title: event.title(),
            start_day: event.start_day(),
            end_day: event.end_day(),
            category: event.category(),
        }
    }
}

/// Encodes a calendar as a JSON document, events in insertion order.
///
/// The output is stable: decoding and encoding it again yields the same bytes.
pub fn serialize(calendar: &Calendar) -> Result<String, Error> {
    let document = CalendarDocumentRef {
        month: calendar.month(),
        year: calendar.year(),
        events: calendar.events().iter().map(EventRecordRef::from).collect(),
    };

    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    document
        .serialize(&mut serializer)
        .map_err(FileAccessError::Encode)?;

    // serde_json only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Decodes a calendar, validating every event against a month of `max_day` days.
///
/// Entries that are malformed or fail validation are skipped with a warning.
/// Only a document that is not JSON, or lacks `month`, `year` or `Events`, is
/// rejected as a whole.
pub fn deserialize(text: &str, max_day: u32) -> Result<Calendar, Error> {
    deserialize_with(text, |_, _| max_day)
}

/// Like [`deserialize`], but the number of days is derived from the document's
/// own month and year.
pub fn deserialize_with<F>(text: &str, max_day: F) -> Result<Calendar, Error>
where
    F: FnOnce(&str, i32) -> u32,
{
    let document: CalendarDocument =
        serde_json::from_str(text).map_err(FileAccessError::Malformed)?;

    let max_day = max_day(&document.month, document.year);
    let mut calendar = Calendar::new(document.month, document.year);
    for (index, value) in document.events.into_iter().enumerate() {
        match decode_event(value, max_day) {
            Ok(event) => {
                calendar.push(event);
            }
            Err(err) => tracing::warn!(index, %err, "skipping event entry"),
        }
    }

    tracing::debug!(
        month = calendar.month(),
        year = calendar.year(),
        events = calendar.len(),
        "calendar decoded"
    );
    Ok(calendar)
}

fn decode_event(
    value: serde_json::Value,
    max_day: u32,
) -> Result<Event, Box<dyn std::error::Error>> {
    let record: EventRecord = serde_json::from_value(value)?;
    let event = Event::new(
        record.title,
        record.start_day,
        record.end_day,
        &record.category,
        max_day,
    )?;
    Ok(event)
}

/// Writes the calendar to `path`, creating parent directories as needed.
#[tracing::instrument(skip(calendar))]
pub fn save(path: &Path, calendar: &Calendar) -> Result<(), Error> {
    let json = serialize(calendar)?;

    let write_err = |source| FileAccessError::Write {
        path: path.to_owned(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, json).map_err(write_err)?;

    tracing::debug!(events = calendar.len(), "calendar saved");
    Ok(())
}

/// Reads a calendar from `path`, see [`deserialize`].
#[tracing::instrument]
pub fn load(path: &Path, max_day: u32) -> Result<Calendar, Error> {
    load_with(path, |_, _| max_day)
}

/// Reads a calendar from `path`, see [`deserialize_with`].
pub fn load_with<F>(path: &Path, max_day: F) -> Result<Calendar, Error>
where
    F: FnOnce(&str, i32) -> u32,
{
    let text = fs::read_to_string(path).map_err(|source| FileAccessError::Read {
        path: path.to_owned(),
        source,
    })?;
    deserialize_with(&text, max_day)
}
