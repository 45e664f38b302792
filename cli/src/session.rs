// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use colored::Colorize;
use moncal_core::{
    Calendar, Config, Error as CoreError, Event, EventId, EventLog, EventPatch, MonthContext,
    persist,
};

/// The calendar being worked on during one invocation.
///
/// Changes go through the session so they are recorded in its audit log and
/// the calendar file is only rewritten when something changed.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    calendar: Calendar,
    max_day: u32,
    log: EventLog,
    dirty: bool,
    print_audit_log: bool,
}

impl Session {
    /// Loads the calendar file, or starts an empty calendar for the current
    /// month when there is none yet.
    #[tracing::instrument(skip(config))]
    pub fn open(config: &Config) -> Result<Self, Box<dyn Error>> {
        let path = config.calendar_path();
        let (calendar, max_day) = if path.exists() {
            let mut max_day = 0;
            let calendar = persist::load_with(&path, |month, year| {
                max_day = days_in_month(month, year);
                max_day
            })?;
            (calendar, max_day)
        } else {
            let ctx = MonthContext::current();
            tracing::debug!(
                path = %path.display(),
                month = ctx.month(),
                "no calendar file, starting empty"
            );
            (Calendar::new(ctx.month(), ctx.year()), ctx.days_in_month())
        };

        Ok(Self {
            path,
            calendar,
            max_day,
            log: EventLog::new(),
            dirty: false,
            print_audit_log: config.print_audit_log,
        })
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// The number of days in the calendar's month.
    pub fn max_day(&self) -> u32 {
        self.max_day
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn add_event(&mut self, event: Event) -> EventId {
        self.dirty = true;
        self.calendar.add_event(event, &mut self.log)
    }

    pub fn delete_event(&mut self, id: EventId) -> Result<Event, CoreError> {
        let event = self.calendar.delete_event(id, &mut self.log)?;
        self.dirty = true;
        Ok(event)
    }

    pub fn update_event(&mut self, id: EventId, patch: &EventPatch) -> Result<&Event, CoreError> {
        let before = self.log.len();
        let event = self
            .calendar
            .update_event(id, patch, self.max_day, &mut self.log)?;
        self.dirty |= self.log.len() > before;
        Ok(event)
    }

    /// Saves the calendar if it changed and prints the audit log if configured.
    pub fn close(self) -> Result<(), Box<dyn Error>> {
        if self.dirty {
            persist::save(&self.path, &self.calendar)?;
        } else {
            tracing::debug!("calendar unchanged, not saving");
        }

        if self.print_audit_log && !self.log.is_empty() {
            eprintln!("{}", "Audit log".bold());
            for entry in &self.log {
                eprintln!("  {entry}");
            }
        }
        Ok(())
    }
}

/// The length of the named month, or of the current month if the name is not
/// recognized.
fn days_in_month(month: &str, year: i32) -> u32 {
    match MonthContext::parse(month, year) {
        Ok(ctx) => ctx.days_in_month(),
        Err(err) => {
            let current = MonthContext::current();
            tracing::warn!(
                %err,
                days = current.days_in_month(),
                "using the length of the current month"
            );
            current.days_in_month()
        }
    }
}
