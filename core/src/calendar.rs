// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Event, EventId, EventLog, EventPatch};

/// The ordered collection of events belonging to one month of one year.
///
/// Events keep their insertion order and several events may share a title.
/// Events are validated when they are constructed, the calendar itself never
/// re-validates them.
#[derive(Debug)]
pub struct Calendar {
    month: String,
    year: i32,
    events: Vec<Event>,
}

impl Calendar {
    /// Creates an empty calendar.
    pub fn new(month: impl Into<String>, year: i32) -> Self {
        Self {
            month: month.into(),
            year,
            events: Vec::new(),
        }
    }

    /// The name of the month.
    pub fn month(&self) -> &str {
        &self.month
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// All events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the calendar has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Appends an event and returns its id.
    pub fn add_event(&mut self, event: Event, log: &mut EventLog) -> EventId {
        log.record(format!(
            "Event titled {} added to the calendar for days {} to {}",
            event.title(),
            event.start_day(),
            event.end_day()
        ));
        self.push(event)
    }

    /// Appends without recording, used when rebuilding a saved calendar.
    pub(crate) fn push(&mut self, event: Event) -> EventId {
        let id = event.id();
        tracing::debug!(%id, title = event.title(), "adding event");
        self.events.push(event);
        id
    }

    /// Removes the event with the given identity and hands it back.
    pub fn delete_event(&mut self, id: EventId, log: &mut EventLog) -> Result<Event, Error> {
        let index = self
            .events
            .iter()
            .position(|e| e.id() == id)
            .ok_or(Error::EventNotFound)?;

        let event = self.events.remove(index);
        log.record(format!(
            "Event titled {} on days {} to {} deleted from the calendar",
            event.title(),
            event.start_day(),
            event.end_day()
        ));
        Ok(event)
    }

    /// Whether this very event is on the calendar.
    pub fn contains(&self, event: &Event) -> bool {
        self.get(event.id()).is_some()
    }

    /// Looks up an event by identity.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == id)
    }

    /// Looks up an event by identity for editing.
    pub fn get_mut(&mut self, id: EventId) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id() == id)
    }

    /// Counts the events with exactly this title.
    pub fn count_titled(&self, title: &str) -> usize {
        self.titled(title).count()
    }

    /// Whether more than one event carries this title.
    pub fn has_duplicate_title(&self, title: &str) -> bool {
        self.titled(title).nth(1).is_some()
    }

    /// Whether any event carries this title.
    pub fn exists_with_title(&self, title: &str) -> bool {
        self.titled(title).next().is_some()
    }

    /// Finds the event with this title, if exactly one event carries it.
    ///
    /// Returns `None` both when no event matches and when several do; check
    /// [`Calendar::has_duplicate_title`] and use
    /// [`Calendar::find_by_title_and_range`] to tell duplicates apart.
    pub fn find_by_title(&self, title: &str) -> Option<&Event> {
        let mut matches = self.titled(title);
        match (matches.next(), matches.next()) {
            (Some(event), None) => Some(event),
            _ => None,
        }
    }

    /// Finds the first event with this title spanning exactly `start..=end`.
    pub fn find_by_title_and_range(&self, title: &str, start: u32, end: u32) -> Option<&Event> {
        self.titled(title)
            .find(|e| e.start_day() == start && e.end_day() == end)
    }

    /// Resolves a title, and a day range when the title is shared, to one event.
    pub fn resolve(&self, title: &str, range: Option<(u32, u32)>) -> Result<&Event, Error> {
        match range {
            Some((start, end)) => self
                .find_by_title_and_range(title, start, end)
                .ok_or(Error::EventNotFound),
            None => match self.count_titled(title) {
                0 => Err(Error::EventNotFound),
                1 => self.find_by_title(title).ok_or(Error::EventNotFound),
                count => Err(Error::AmbiguousTitle {
                    title: title.to_string(),
                    count,
                }),
            },
        }
    }

    /// Applies a patch to the event with the given identity.
    pub fn update_event(
        &mut self,
        id: EventId,
        patch: &EventPatch,
        max_day: u32,
        log: &mut EventLog,
    ) -> Result<&Event, Error> {
        let event = self.get_mut(id).ok_or(Error::EventNotFound)?;
        event.apply(patch, max_day, log)?;
        Ok(&*event)
    }

    /// Events spanning the given day, in insertion order.
    pub fn events_on_day(&self, day: u32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.occurs_on(day))
    }

    fn titled<'a>(&'a self, title: &str) -> impl Iterator<Item = &'a Event> {
        self.events.iter().filter(move |e| e.title() == title)
    }
}
