// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use uuid::Uuid;

use crate::validate::{validate_category, validate_date_range};
use crate::{Category, Error, EventLog, InvalidCategory, InvalidDates};

/// Opaque identity of an event.
///
/// Two events with identical fields are still different events, lookups by
/// identity compare this id and never the event's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(Uuid);

impl EventId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A titled, categorized entry spanning an inclusive range of days within one month.
///
/// Not `Clone`: a copy would share the identity of the original.
#[derive(Debug)]
pub struct Event {
    id: EventId,
    title: String,
    start_day: u32,
    end_day: u32,
    category: Category,
    days: Vec<u32>,
}

impl Event {
    /// Creates an event, checking the day range against a month of `max_day`
    /// days and the category against the known categories.
    ///
    /// Dates are checked before the category.
    pub fn new(
        title: impl Into<String>,
        start_day: u32,
        end_day: u32,
        category: &str,
        max_day: u32,
    ) -> Result<Self, Error> {
        validate_date_range(start_day, end_day, max_day)?;
        let category = validate_category(category)?;
        Ok(Self::build(title.into(), start_day, end_day, category))
    }

    /// Creates an event from an already parsed category.
    pub fn with_category(
        title: impl Into<String>,
        start_day: u32,
        end_day: u32,
        category: Category,
        max_day: u32,
    ) -> Result<Self, InvalidDates> {
        validate_date_range(start_day, end_day, max_day)?;
        Ok(Self::build(title.into(), start_day, end_day, category))
    }

    fn build(title: String, start_day: u32, end_day: u32, category: Category) -> Self {
        Self {
            id: EventId::new(),
            title,
            start_day,
            end_day,
            category,
            days: (start_day..=end_day).collect(),
        }
    }

    /// The identity of this event.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The title of the event.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The first day of the event.
    pub fn start_day(&self) -> u32 {
        self.start_day
    }

    /// The last day of the event, inclusive.
    pub fn end_day(&self) -> u32 {
        self.end_day
    }

    /// The category of the event.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Every day the event spans, in ascending order.
    pub fn days(&self) -> &[u32] {
        &self.days
    }

    /// Whether the event spans the given day.
    pub fn occurs_on(&self, day: u32) -> bool {
        (self.start_day..=self.end_day).contains(&day)
    }

    /// Changes the title.
    pub fn rename(&mut self, title: impl Into<String>, log: &mut EventLog) {
        let title = title.into();
        log.record(format!(
            "Event title changed from {} to {}",
            self.title, title
        ));
        self.title = title;
    }

    /// Moves the event to another day range.
    ///
    /// On failure the event is left untouched.
    pub fn reschedule(
        &mut self,
        start_day: u32,
        end_day: u32,
        max_day: u32,
        log: &mut EventLog,
    ) -> Result<(), InvalidDates> {
        validate_date_range(start_day, end_day, max_day)?;
        self.set_days(start_day, end_day);
        log.record(format!(
            "Event titled {}: start day changed to {} and end day changed to {}",
            self.title, start_day, end_day
        ));
        Ok(())
    }

    /// Changes the category.
    ///
    /// On failure the event is left untouched.
    pub fn recategorize(&mut self, category: &str, log: &mut EventLog) -> Result<(), InvalidCategory> {
        let category = validate_category(category)?;
        self.set_category(category, log);
        Ok(())
    }

    /// Applies every field of the patch, or none of them.
    pub fn apply(&mut self, patch: &EventPatch, max_day: u32, log: &mut EventLog) -> Result<(), Error> {
        if let Some((start, end)) = patch.days {
            validate_date_range(start, end, max_day)?;
        }

        if let Some((start, end)) = patch.days {
            if (start, end) != (self.start_day, self.end_day) {
                self.reschedule(start, end, max_day, log)?;
            }
        }

        if let Some(category) = patch.category {
            if category != self.category {
                self.set_category(category, log);
            }
        }

        if let Some(title) = &patch.title {
            if title != &self.title {
                self.rename(title.clone(), log);
            }
        }

        Ok(())
    }

    fn set_days(&mut self, start_day: u32, end_day: u32) {
        self.start_day = start_day;
        self.end_day = end_day;
        self.days.clear();
        self.days.extend(start_day..=end_day);
    }

    fn set_category(&mut self, category: Category, log: &mut EventLog) {
        log.record(format!(
            "Event titled {}: category changed from {} to {}",
            self.title, self.category, category
        ));
        self.category = category;
    }
}

/// Patch for an event, allowing partial updates.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventPatch {
    /// The new title, if any.
    pub title: Option<String>,

    /// The new start and end day, if any.
    pub days: Option<(u32, u32)>,

    /// The new category, if any.
    pub category: Option<Category>,
}

impl EventPatch {
    /// Is this patch empty, meaning no fields are set
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.days.is_none() && self.category.is_none()
    }
}
