// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, slice};

use jiff::Timestamp;

/// A single audit record describing a change to the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: Timestamp,
    description: String,
}

impl LogEntry {
    /// When the change was recorded.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Human-readable description of the change.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.timestamp, self.description)
    }
}

/// Append-only audit trail of the mutations made during a session.
///
/// One log is created per session and handed to every mutating call, entries
/// are never removed.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time.
    pub fn record(&mut self, description: impl Into<String>) {
        let entry = LogEntry {
            timestamp: Timestamp::now(),
            description: description.into(),
        };
        tracing::info!(description = %entry.description, "audit");
        self.entries.push(entry);
    }

    /// Iterates the entries in the order they were recorded.
    ///
    /// The iterator borrows the log and can be cloned to replay it.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    /// The number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a LogEntry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Read-only iterator over an [`EventLog`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: slice::Iter<'a, LogEntry>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
