//! CLI argument definitions.

use super::validators::{parse_date, parse_offset, parse_week, parse_year};
use crate::config::Units;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Weekly training plan viewer with a weather forecast overlay.
#[derive(Debug, Parser)]
#[command(name = "weekplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: show).
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Options shared by all commands.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Options for the default `show` command.
    #[command(flatten)]
    pub show: ShowArgs,
}

impl Cli {
    /// Parse arguments, exiting with a usage error on bad input.
    pub fn parse_args() -> Self {
        let cli = Self::parse();
        if let Err(e) = cli.check_show_placement() {
            e.exit();
        }
        cli
    }

    /// Reject `show` options given before a subcommand, where they would
    /// otherwise be ignored.
    pub fn check_show_placement(&self) -> Result<(), clap::Error> {
        if self.command.is_none() || self.show == ShowArgs::default() {
            return Ok(());
        }
        Err(Self::command().error(
            clap::error::ErrorKind::ArgumentConflict,
            "week options (--week, --year, --offset, --date, --output, --no-forecast) \
             must follow the subcommand, e.g. `weekplan show --week 3`",
        ))
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one week of the plan.
    Show(ShowArgs),
    /// Browse weeks interactively.
    Browse(BrowseArgs),
    /// Validate the schedule and list which weeks have a plan.
    Check,
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Options shared by all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Schedule JSON file (overrides config; bundled schedule if unset).
    #[arg(short, long, global = true, env = "WEEKPLAN_SCHEDULE")]
    pub schedule: Option<PathBuf>,

    /// Configuration file (default: platform config directory).
    #[arg(long, global = true, env = "WEEKPLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Forecast API key (overrides config).
    #[arg(long, global = true, env = "WEEKPLAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Forecast location (overrides config).
    #[arg(long, global = true, env = "WEEKPLAN_LOCATION")]
    pub location: Option<String>,

    /// Temperature units: metric, imperial or standard (overrides config).
    #[arg(long, global = true)]
    pub units: Option<Units>,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Which week to show and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ShowArgs {
    /// Week number to show (1-53, default: current week).
    #[arg(short, long, value_parser = parse_week)]
    pub week: Option<u32>,

    /// ISO week-year for --week (default: current year).
    #[arg(short, long, requires = "week", value_parser = parse_year)]
    pub year: Option<i32>,

    /// Weeks to move from the selected week (negative moves back).
    #[arg(long, allow_negative_numbers = true, default_value_t = 0, value_parser = parse_offset)]
    pub offset: i32,

    /// Treat this date (YYYY-MM-DD) as today.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputMode::Human)]
    pub output: OutputMode,

    /// Skip the weather forecast.
    #[arg(long)]
    pub no_forecast: bool,
}

/// Options for the interactive browser.
#[derive(Debug, Clone, Default, Args)]
pub struct BrowseArgs {
    /// Treat this date (YYYY-MM-DD) as today.
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Skip the weather forecast.
    #[arg(long)]
    pub no_forecast: bool,
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-readable text.
    #[default]
    Human,
    /// JSON document.
    Json,
}
