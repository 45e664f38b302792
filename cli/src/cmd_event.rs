// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use moncal_core::{Event, EventPatch, validate_category, validate_date_range};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::EventFormatter;
use crate::session::Session;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventAdd {
    pub title: String,
    pub start: u32,
    pub end: u32,
    pub category: String,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventAdd {
    pub const NAME: &str = "add";

    pub fn command() -> Command {
        let args = EventArgs::new(true);
        Command::new(Self::NAME)
            .alias("new")
            .about("Add a new event")
            .arg(EventArgs::title())
            .arg(args.start())
            .arg(args.end())
            .arg(args.category())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            title: EventArgs::get_title(matches)?,
            start: EventArgs::get_start(matches).ok_or("Start day is required")?,
            end: EventArgs::get_end(matches).ok_or("End day is required")?,
            category: EventArgs::get_category(matches).ok_or("Category is required")?,

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let event = Event::new(
            self.title,
            self.start,
            self.end,
            &self.category,
            session.max_day(),
        )?;
        let id = session.add_event(event);

        let calendar = session.calendar();
        let event = calendar.get(id).ok_or("Event not found")?;
        CmdEventList::print(&[event], self.output_format, self.verbose);

        let count = calendar.count_titled(event.title());
        if count > 1 && self.output_format == OutputFormat::Table {
            let note = format!(
                "{count} events are now titled '{}', pick one with --at START END",
                event.title()
            );
            println!("{}", note.italic());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub title: String,
    pub at: Option<(u32, u32)>,
    pub new_title: Option<String>,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub category: Option<String>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        let args = EventArgs::new(false);
        Command::new(Self::NAME)
            .about("Edit an event")
            .arg(EventArgs::title())
            .arg(EventArgs::at())
            .arg(EventArgs::new_title())
            .arg(args.start())
            .arg(args.end())
            .arg(args.category())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            title: EventArgs::get_title(matches)?,
            at: EventArgs::get_at(matches),
            new_title: EventArgs::get_new_title(matches),
            start: EventArgs::get_start(matches),
            end: EventArgs::get_end(matches),
            category: EventArgs::get_category(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let patch = EventPatch {
            title: self.new_title,
            days: self.start.zip(self.end),
            category: self
                .category
                .as_deref()
                .map(validate_category)
                .transpose()?,
        };
        if patch.is_empty() {
            return Err(
                "Nothing to change, specify --title, --start and --end, or --category".into(),
            );
        }

        let id = session.calendar().resolve(&self.title, self.at)?.id();
        let event = session.update_event(id, &patch)?;
        CmdEventList::print(&[event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub title: String,
    pub at: Option<(u32, u32)>,

    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(EventArgs::title())
            .arg(EventArgs::at())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            title: EventArgs::get_title(matches)?,
            at: EventArgs::get_at(matches),

            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let id = session.calendar().resolve(&self.title, self.at)?.id();
        let event = session.delete_event(id)?;

        if self.output_format == OutputFormat::Table {
            println!("{}", "Deleted".italic());
        }
        CmdEventList::print(&[&event], self.output_format, self.verbose);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List all events of the month")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let events: Vec<_> = session.calendar().events().iter().collect();
        Self::list(&events, self.output_format, self.verbose);
        Ok(())
    }

    /// List events, or say there are none.
    pub fn list(events: &[&Event], output_format: OutputFormat, verbose: bool) {
        if events.is_empty() && output_format == OutputFormat::Table {
            println!("{}", "No events found".italic());
        } else {
            Self::print(events, output_format, verbose);
        }
    }

    pub fn print(events: &[&Event], output_format: OutputFormat, verbose: bool) {
        let formatter = EventFormatter::with_verbose(verbose).with_output_format(output_format);
        print!("{}", formatter.format(events));
        if output_format == OutputFormat::Json {
            println!();
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventDay {
    pub day: u32,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("on")
            .about("List the events planned on a day")
            .arg(arg!(day: <DAY> "Day of the month").value_parser(value_parser!(u32)))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            day: matches.get_one("day").copied().ok_or("Day is required")?,
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub fn run(self, session: &mut Session) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events on day...");
        validate_date_range(self.day, self.day, session.max_day())?;

        let events: Vec<_> = session.calendar().events_on_day(self.day).collect();
        CmdEventList::list(&events, self.output_format, self.verbose);
        Ok(())
    }
}
