// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A column of a table, rendering one field of a row.
pub trait TableColumn<T> {
    /// The name of the column, used as the key in JSON output.
    fn name(&self) -> Cow<'_, str>;

    /// The cell of this column for the given row.
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    /// The JSON value of this column for the given row.
    fn json(&self, data: &T) -> serde_json::Value {
        serde_json::Value::String(self.format(data).into_owned())
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// How a table is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// Aligned, colored columns separated by spaces.
    Basic,

    /// A pretty-printed JSON array of objects keyed by column name.
    Json,
}

#[derive(Debug)]
pub struct Table<'a, T, C: TableColumn<T>> {
    style: TableStyle,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, T, C: TableColumn<T>> Table<'a, T, C> {
    pub fn new(style: TableStyle, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }

    fn fmt_basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SEPARATOR: &str = "  ";

        let table: Vec<Vec<Cow<'_, str>>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = column_widths(&table, self.columns.len());
        for (row, cells) in self.data.iter().zip(&table) {
            for (i, (col, cell)) in self.columns.iter().zip(cells).enumerate() {
                let last = i + 1 == self.columns.len();
                let fill = widths[i].saturating_sub(cell.width());
                let cell = match col.padding_direction() {
                    // last column does not need padding if it's left-aligned
                    PaddingDirection::Left if last => cell.to_string(),
                    PaddingDirection::Left => format!("{cell}{}", " ".repeat(fill)),
                    PaddingDirection::Right => format!("{}{cell}", " ".repeat(fill)),
                };

                match col.color(row) {
                    Some(color) => write!(f, "{}", cell.color(color))?,
                    None => write!(f, "{cell}")?,
                }

                if last {
                    writeln!(f)?;
                } else {
                    write!(f, "{SEPARATOR}")?;
                }
            }
        }
        Ok(())
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<serde_json::Value> = self
            .data
            .iter()
            .map(|row| {
                let obj = self
                    .columns
                    .iter()
                    .map(|col| (col.name().into_owned(), col.json(row)))
                    .collect();
                serde_json::Value::Object(obj)
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

impl<T, C: TableColumn<T>> fmt::Display for Table<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            TableStyle::Basic => self.fmt_basic(f),
            TableStyle::Json => self.fmt_json(f),
        }
    }
}

fn column_widths(table: &[Vec<Cow<'_, str>>], len: usize) -> Vec<usize> {
    let mut widths = vec![0; len];
    for row in table {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}
