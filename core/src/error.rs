// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{io, path::PathBuf};

/// Errors returned by calendar operations.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The day range of an event is not valid for the month.
    #[error(transparent)]
    InvalidDates(#[from] InvalidDates),

    /// The category is not one of the known categories.
    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategory),

    /// The event is not on the calendar.
    #[error("Event not found")]
    EventNotFound,

    /// Several events share the title and no day range was given to pick one.
    #[error("{count} events are titled '{title}', specify their start and end day")]
    AmbiguousTitle {
        /// The shared title.
        title: String,

        /// How many events carry it.
        count: usize,
    },

    /// The month name could not be resolved to a calendar month.
    #[error("Unknown month '{month}' in year {year}")]
    InvalidMonth {
        /// The month name as given.
        month: String,

        /// The year as given.
        year: i32,
    },

    /// Reading or writing the calendar file failed.
    #[error(transparent)]
    FileAccess(#[from] FileAccessError),
}

/// Reasons a day range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDates {
    /// The start day comes after the end day.
    #[error("Start day {start} is after end day {end}")]
    StartAfterEnd {
        /// The requested start day.
        start: u32,

        /// The requested end day.
        end: u32,
    },

    /// A day lies past the last day of the month.
    #[error("Day {day} exceeds the last day of the month ({max_day})")]
    DateExceedsMonth {
        /// The offending day.
        day: u32,

        /// The number of days in the month.
        max_day: u32,
    },

    /// Days are 1-indexed, day 0 does not exist.
    #[error("Days of the month start at 1")]
    DateBeforeMonth,
}

/// The category is not one of `school`, `work`, `family`, `friends` or `personal`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid category '{0}', expected one of: school, work, family, friends, personal")]
pub struct InvalidCategory(pub String);

/// Failures while persisting a calendar.
#[derive(Debug, thiserror::Error)]
pub enum FileAccessError {
    /// The file could not be read.
    #[error("Failed to read calendar file {}: {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// The file could not be written.
    #[error("Failed to write calendar file {}: {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,

        /// The underlying I/O error.
        source: io::Error,
    },

    /// The document is not JSON or lacks `month`, `year` or `Events`.
    #[error("Malformed calendar document: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The calendar could not be encoded.
    #[error("Failed to encode calendar: {0}")]
    Encode(#[source] serde_json::Error),
}
