// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{Category, InvalidCategory, InvalidDates};

/// Checks that `start..=end` is a non-empty range of days inside a month of `max_day` days.
pub fn validate_date_range(start: u32, end: u32, max_day: u32) -> Result<(), InvalidDates> {
    if start > end {
        Err(InvalidDates::StartAfterEnd { start, end })
    } else if end > max_day {
        // start <= end, so end is the first day to overflow
        Err(InvalidDates::DateExceedsMonth { day: end, max_day })
    } else if start == 0 {
        Err(InvalidDates::DateBeforeMonth)
    } else {
        Ok(())
    }
}

/// Parses a category name. Matching is exact and case-sensitive.
pub fn validate_category(value: &str) -> Result<Category, InvalidCategory> {
    value.parse()
}
