// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use moncal_core::{Calendar, Config, MonthContext, persist};

use crate::arg::CommonArgs;
use crate::cmd_event::CmdEventList;
use crate::session::Session;
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdShow {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the month and all of its events")
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
        tracing::debug!(?self, "showing calendar...");
        let calendar = session.calendar();
        match self.output_format {
            OutputFormat::Json => println!("{}", persist::serialize(calendar)?),
            OutputFormat::Table => {
                let header = format!("{} {}", calendar.month(), calendar.year());
                println!("🗓️ {} ({} days)", header.bold(), session.max_day());
                let events: Vec<_> = calendar.events().iter().collect();
                CmdEventList::list(&events, self.output_format, self.verbose);
            }
        }
        Ok(())
    }
}

impl Default for CmdShow {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdInit {
    pub month: Option<String>,
    pub year: Option<i32>,
    pub force: bool,
}

impl CmdInit {
    pub const NAME: &str = "init";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Start an empty calendar, for the current month by default")
            .arg(arg!(--month <MONTH> "Name of the month, e.g. April or apr"))
            .arg(arg!(--year <YEAR> "The year").value_parser(value_parser!(i32)))
            .arg(arg!(-f --force "Overwrite an existing calendar file"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            month: matches.get_one("month").cloned(),
            year: matches.get_one("year").copied(),
            force: matches.get_flag("force"),
        }
    }

    /// Writes the empty calendar straight away, without loading the old file.
    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "initializing calendar...");
        let ctx = self.month_context()?;

        let path = config.calendar_path();
        if path.exists() && !self.force {
            return Err(format!(
                "Calendar file already exists at {}, use --force to overwrite it",
                path.display()
            )
            .into());
        }

        let calendar = Calendar::new(ctx.month(), ctx.year());
        persist::save(&path, &calendar)?;
        println!(
            "Started {} {} ({} days) at {}",
            ctx.month().bold(),
            ctx.year(),
            ctx.days_in_month(),
            path.display()
        );
        Ok(())
    }

    fn month_context(&self) -> Result<MonthContext, Box<dyn Error>> {
        let current = MonthContext::current();
        Ok(match (&self.month, self.year) {
            (None, None) => current,
            (month, year) => MonthContext::parse(
                month.as_deref().unwrap_or(current.month()),
                year.unwrap_or(current.year()),
            )?,
        })
    }
}
