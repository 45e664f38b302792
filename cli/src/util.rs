// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::table::TableStyle;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl From<OutputFormat> for TableStyle {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => TableStyle::Json,
            OutputFormat::Table => TableStyle::Basic,
        }
    }
}

/// Formats an inclusive day range, collapsing single days.
pub fn format_day_span(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start}~{end}")
    }
}
