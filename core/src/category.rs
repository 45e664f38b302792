// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use crate::InvalidCategory;

/// The category an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Classes, exams and assignments.
    School,

    /// Shifts, meetings and deadlines.
    Work,

    /// Family gatherings.
    Family,

    /// Time with friends.
    Friends,

    /// Everything else.
    Personal,
}

const CATEGORY_SCHOOL: &str = "school";
const CATEGORY_WORK: &str = "work";
const CATEGORY_FAMILY: &str = "family";
const CATEGORY_FRIENDS: &str = "friends";
const CATEGORY_PERSONAL: &str = "personal";

impl Category {
    /// All categories, in the order they are offered to users.
    pub const ALL: [Category; 5] = [
        Category::School,
        Category::Work,
        Category::Family,
        Category::Friends,
        Category::Personal,
    ];
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::School => CATEGORY_SCHOOL,
            Category::Work => CATEGORY_WORK,
            Category::Family => CATEGORY_FAMILY,
            Category::Friends => CATEGORY_FRIENDS,
            Category::Personal => CATEGORY_PERSONAL,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Category {
    type Err = InvalidCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_SCHOOL => Ok(Category::School),
            CATEGORY_WORK => Ok(Category::Work),
            CATEGORY_FAMILY => Ok(Category::Family),
            CATEGORY_FRIENDS => Ok(Category::Friends),
            CATEGORY_PERSONAL => Ok(Category::Personal),
            _ => Err(InvalidCategory(value.to_string())),
        }
    }
}
