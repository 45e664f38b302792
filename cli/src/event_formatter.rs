// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use moncal_core::{Category, Event};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, format_day_span};

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    /// The columns to show, with the id and the full list of days when verbose.
    pub fn with_verbose(verbose: bool) -> Self {
        let columns = if verbose {
            vec![
                EventColumn::id(),
                EventColumn::title(),
                EventColumn::span(),
                EventColumn::category(),
                EventColumn::day_list(),
            ]
        } else {
            vec![
                EventColumn::title(),
                EventColumn::span(),
                EventColumn::category(),
            ]
        };
        Self::new(columns)
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [&'a Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = Table::new(
            self.formatter.format.into(),
            &self.formatter.columns,
            self.events,
        );
        write!(f, "{table}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Title,
    Span,
    Category,
    DayList,
}

impl EventColumn {
    pub fn id() -> Self {
        Self::Id
    }

    pub fn title() -> Self {
        Self::Title
    }

    pub fn span() -> Self {
        Self::Span
    }

    pub fn category() -> Self {
        Self::Category
    }

    pub fn day_list() -> Self {
        Self::DayList
    }
}

impl<'e> TableColumn<&'e Event> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Span => "days",
            Self::Category => "category",
            Self::DayList => "day_list",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &'e Event) -> Cow<'a, str> {
        match self {
            Self::Id => data.id().to_string().into(),
            Self::Title => data.title().into(),
            Self::Span => format_day_span(data.start_day(), data.end_day()).into(),
            Self::Category => data.category().to_string().into(),
            Self::DayList => data
                .days()
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",")
                .into(),
        }
    }

    fn json(&self, data: &&'e Event) -> serde_json::Value {
        match self {
            Self::Span => serde_json::json!({
                "start": data.start_day(),
                "end": data.end_day(),
            }),
            Self::DayList => data.days().into(),
            _ => self.format(data).into_owned().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Span => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, data: &&'e Event) -> Option<Color> {
        Some(category_color(data.category()))
    }
}

/// The color rows of the given category are printed in.
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Family => Color::Red,
        Category::Friends => Color::Magenta,
        Category::Personal => Color::Green,
        Category::School => Color::Blue,
        Category::Work => Color::Yellow,
    }
}
