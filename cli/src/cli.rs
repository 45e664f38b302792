// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use moncal_core::APP_NAME;
use tracing_subscriber::EnvFilter;

use crate::cmd_calendar::{CmdInit, CmdShow};
use crate::cmd_event::{CmdEventAdd, CmdEventDay, CmdEventDelete, CmdEventEdit, CmdEventList};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;
use crate::session::Session;

/// Run the moncal command-line interface.
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().and_then(Cli::run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A calendar of the events in a single month.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to show
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $MONCAL_CONFIG if set, otherwise \
$XDG_CONFIG_HOME/moncal/config.toml on Linux and MacOS, %LOCALAPPDATA%/moncal/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdShow::command())
            .subcommand(CmdInit::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("Manage the events of the month")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventAdd::command())
                    .subcommand(CmdEventEdit::command())
                    .subcommand(CmdEventDelete::command())
                    .subcommand(CmdEventList::command())
                    .subcommand(CmdEventDay::command()),
            )
            .subcommand(CmdEventAdd::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdShow::NAME, matches)) => Show(CmdShow::from(matches)),
            Some((CmdInit::NAME, matches)) => Init(CmdInit::from(matches)),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventAdd::NAME, matches)) => EventAdd(CmdEventAdd::from(matches)?),
                Some((CmdEventEdit::NAME, matches)) => EventEdit(CmdEventEdit::from(matches)?),
                Some((CmdEventDelete::NAME, matches)) => {
                    EventDelete(CmdEventDelete::from(matches)?)
                }
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                Some((CmdEventDay::NAME, matches)) => EventDay(CmdEventDay::from(matches)?),
                _ => return Err("Unknown event command".into()),
            },
            Some((CmdEventAdd::NAME, matches)) => EventAdd(CmdEventAdd::from(matches)?),
            Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            None => Show(CmdShow::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the month and its events
    Show(CmdShow),

    /// Start an empty calendar
    Init(CmdInit),

    /// Add an event
    EventAdd(CmdEventAdd),

    /// Edit an event
    EventEdit(CmdEventEdit),

    /// Delete an event
    EventDelete(CmdEventDelete),

    /// List all events
    EventList(CmdEventList),

    /// List the events on a day
    EventDay(CmdEventDay),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Show(a)        => Self::run_with(config, |x| a.run(x)),
            EventAdd(a)    => Self::run_with(config, |x| a.run(x)),
            EventEdit(a)   => Self::run_with(config, |x| a.run(x)),
            EventDelete(a) => Self::run_with(config, |x| a.run(x)),
            EventList(a)   => Self::run_with(config, |x| a.run(x)),
            EventDay(a)    => Self::run_with(config, |x| a.run(x)),
            Init(a) => {
                tracing::debug!("parsing configuration...");
                a.run(&parse_config(config)?)
            }
            GenerateCompletion(a) => a.run(),
        }
    }

    fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(&mut Session) -> Result<(), Box<dyn Error>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config)?;
        let mut session = Session::open(&config)?;

        f(&mut session)?;

        session.close()
    }
}
