// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core library for moncal, a calendar of the events in a single month.
//!
//! A [`Calendar`] holds validated [`Event`]s in insertion order. Every change
//! made through the calendar is recorded in an [`EventLog`] passed in by the
//! caller, and [`persist`] reads and writes the calendar as a JSON document.

mod audit;
mod calendar;
mod category;
mod config;
mod error;
mod event;
mod month;
pub mod persist;
mod validate;

pub use crate::audit::{Entries, EventLog, LogEntry};
pub use crate::calendar::Calendar;
pub use crate::category::Category;
pub use crate::config::{APP_NAME, Config, get_config_dir};
pub use crate::error::{Error, FileAccessError, InvalidCategory, InvalidDates};
pub use crate::event::{Event, EventId, EventPatch};
pub use crate::month::MonthContext;
pub use crate::validate::{validate_category, validate_date_range};
