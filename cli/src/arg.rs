// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, ValueEnum, arg, value_parser};
use moncal_core::Category;

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventArgs {
    required: bool,
}

impl EventArgs {
    /// Arguments for creating an event, where the days and category are required.
    pub const fn new(required: bool) -> Self {
        Self { required }
    }

    pub fn title() -> Arg {
        arg!(title: <TITLE> "Title of the event")
    }

    pub fn get_title(matches: &ArgMatches) -> Result<String, Box<dyn Error>> {
        matches
            .get_one::<String>("title")
            .cloned()
            .ok_or_else(|| "Title is required".into())
    }

    pub fn start(self) -> Arg {
        let arg = arg!(--start <DAY> "First day of the event")
            .value_parser(value_parser!(u32))
            .required(self.required);
        if self.required { arg } else { arg.requires("end") }
    }

    pub fn get_start(matches: &ArgMatches) -> Option<u32> {
        matches.get_one("start").copied()
    }

    pub fn end(self) -> Arg {
        let arg = arg!(--end <DAY> "Last day of the event, inclusive")
            .value_parser(value_parser!(u32))
            .required(self.required);
        if self.required { arg } else { arg.requires("start") }
    }

    pub fn get_end(matches: &ArgMatches) -> Option<u32> {
        matches.get_one("end").copied()
    }

    pub fn category(self) -> Arg {
        let names: Vec<_> = Category::value_variants()
            .iter()
            .filter_map(|c| c.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        arg!(--category <CATEGORY> "Category of the event")
            .long_help(format!("Category of the event, one of: {}", names.join(", ")))
            .required(self.required)
    }

    pub fn get_category(matches: &ArgMatches) -> Option<String> {
        matches.get_one("category").cloned()
    }

    pub fn new_title() -> Arg {
        arg!(new_title: -t --title <TITLE> "New title of the event")
    }

    pub fn get_new_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("new_title").cloned()
    }

    /// Picks one of several events sharing a title by their day range.
    pub fn at() -> Arg {
        arg!(--at <DAYS> "Start and end day of the event, when several events share the title")
            .num_args(2)
            .value_names(["START", "END"])
            .value_parser(value_parser!(u32))
    }

    pub fn get_at(matches: &ArgMatches) -> Option<(u32, u32)> {
        let mut days = matches.get_many::<u32>("at")?;
        match (days.next(), days.next()) {
            (Some(start), Some(end)) => Some((*start, *end)),
            _ => None,
        }
    }
}
