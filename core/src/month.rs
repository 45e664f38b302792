// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{Zoned, civil::Date};

use crate::Error;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The month a calendar covers, and how many days it has.
///
/// This is where wall-clock time enters the program; everything else takes the
/// number of days as a plain `max_day` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthContext {
    month: &'static str,
    year: i32,
    days_in_month: u32,
}

impl MonthContext {
    /// The month of today's local date.
    pub fn current() -> Self {
        Self::from_date(Zoned::now().date())
    }

    /// The month containing the given date.
    pub fn from_date(date: Date) -> Self {
        let index = usize::try_from(date.month() - 1).unwrap_or_default();
        Self {
            month: MONTH_NAMES[index],
            year: i32::from(date.year()),
            days_in_month: u32::try_from(date.days_in_month()).unwrap_or_default(),
        }
    }

    /// Resolves an English month name, full (`April`) or abbreviated (`apr`),
    /// in any letter case.
    pub fn parse(month: &str, year: i32) -> Result<Self, Error> {
        let invalid = || Error::InvalidMonth {
            month: month.to_string(),
            year,
        };

        let name = month.trim();
        let index = MONTH_NAMES
            .iter()
            .position(|m| {
                m.eq_ignore_ascii_case(name)
                    || (name.len() == 3 && m[..3].eq_ignore_ascii_case(name))
            })
            .ok_or_else(invalid)?;

        let year = i16::try_from(year).map_err(|_| invalid())?;
        let month = i8::try_from(index + 1).map_err(|_| invalid())?;
        let date = Date::new(year, month, 1).map_err(|_| invalid())?;
        Ok(Self::from_date(date))
    }

    /// The English name of the month.
    pub fn month(&self) -> &'static str {
        self.month
    }

    /// The year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The number of days in the month, used as `max_day` in validation.
    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }
}
