//! Weekplan - weekly training plan viewer.
//!
//! This crate parses a hand-written weekly training schedule, maps dates to
//! ISO weeks, and shows a week either as text/JSON or in an interactive
//! terminal browser, optionally with a 5-day weather forecast.

#![warn(missing_docs)]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod progress;
pub mod schedule;
pub mod tui;
pub mod view;

use std::io::Write;
use std::path::Path;

use calendar::{IsoWeekId, WeekCursor, week_of, weeks_in_year};
use cli::{BrowseArgs, Cli, Command, ConfigAction, GlobalArgs, OutputMode, ShowArgs};
use config::{Config, ForecastConfig, load_config, resolve_config_path, save_config_to};
use forecast::{ForecastSample, fetch_forecast};
use schedule::{Schedule, load_schedule};
use tracing::{debug, info};
use view::{ViewSettings, WeekView, render_json, render_text};

pub use error::{Error, Result};

/// Main entry point for the weekplan CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // The browser owns the terminal, so it gets no log output.
    let browsing = matches!(cli.command, Some(Command::Browse(_)));
    init_logging(cli.global.verbose, cli.global.quiet, browsing);

    // Config commands must work even with an invalid config file.
    if let Some(Command::Config { action }) = cli.command {
        return handle_config_command(action, cli.global.config.as_deref());
    }

    let mut config = load_config(cli.global.config.as_deref())?;
    apply_overrides(&mut config, &cli.global);
    config::validate_config(&config)?;

    match cli.command {
        None => show_week(&cli.show, &config, cli.global.quiet),
        Some(Command::Show(args)) => show_week(&args, &config, cli.global.quiet),
        Some(Command::Browse(args)) => browse(&args, &config),
        Some(Command::Check) => check_schedule(&config),
        Some(Command::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: u8, quiet: bool, browsing: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if browsing {
        "off"
    } else if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // stdout carries the rendered week, so logs go to stderr.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Apply command-line and environment overrides on top of the config file.
fn apply_overrides(config: &mut Config, global: &GlobalArgs) {
    if let Some(ref path) = global.schedule {
        config.schedule.path = Some(path.clone());
    }
    if let Some(ref key) = global.api_key {
        config.forecast.api_key = Some(key.clone());
    }
    if let Some(ref location) = global.location {
        config.forecast.location.clone_from(location);
    }
    if let Some(units) = global.units {
        config.forecast.units = units;
    }
}

/// Week to start on: an explicit `--week`/`--year`, else today's week.
fn initial_cursor(week: Option<u32>, year: Option<i32>, today: chrono::NaiveDate) -> Result<WeekCursor> {
    let Some(week) = week else {
        return Ok(WeekCursor::starting_at(today));
    };
    let year = year.unwrap_or_else(|| week_of(today).year);
    IsoWeekId::new(year, week)
        .map(WeekCursor::at)
        .ok_or(Error::WeekOutOfRange { year, week })
}

fn forecast_requested(config: &ForecastConfig, skip: bool) -> bool {
    if skip {
        debug!("Forecast skipped (--no-forecast)");
        return false;
    }
    if !config.enabled {
        debug!("Forecast disabled in configuration");
        return false;
    }
    if config.api_key.is_none() {
        info!("No forecast API key configured; showing the plan without weather");
        return false;
    }
    true
}

/// Fetch the forecast on a short-lived runtime.
fn fetch_forecast_blocking(config: &ForecastConfig, show_spinner: bool) -> Result<Vec<ForecastSample>> {
    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    let spinner = progress::create_spinner("Fetching forecast...", show_spinner);
    let samples = runtime.block_on(fetch_forecast(config));
    progress::finish_spinner(spinner);

    Ok(samples)
}

/// Handle `show` (also the default command).
fn show_week(args: &ShowArgs, config: &Config, quiet: bool) -> Result<()> {
    let schedule = load_schedule(config.schedule.path.as_deref())?;
    let today = args.date.unwrap_or_else(calendar::today);

    let mut cursor = initial_cursor(args.week, args.year, today)?;
    cursor.shift(args.offset);
    debug!("Showing week {} (today is {today})", cursor.week());

    let forecast = if forecast_requested(&config.forecast, args.no_forecast) {
        fetch_forecast_blocking(&config.forecast, !quiet)?
    } else {
        Vec::new()
    };

    let view = WeekView::build(
        &schedule,
        &cursor,
        today,
        &forecast,
        &ViewSettings::from(config),
    );

    let mut out = std::io::stdout().lock();
    match args.output {
        OutputMode::Human => render_text(&view, &mut out)?,
        OutputMode::Json => render_json(&view, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Handle `browse`.
fn browse(args: &BrowseArgs, config: &Config) -> Result<()> {
    use tokio::sync::oneshot;

    let schedule = load_schedule(config.schedule.path.as_deref())?;
    let today = args.date.unwrap_or_else(calendar::today);

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("Failed to create async runtime: {e}"),
    })?;

    let pending = forecast_requested(&config.forecast, args.no_forecast).then(|| {
        let (tx, rx) = oneshot::channel();
        let forecast_config = config.forecast.clone();
        runtime.spawn(async move {
            let samples = fetch_forecast(&forecast_config).await;
            // Receiver is gone if the browser already exited.
            let _ = tx.send(samples);
        });
        rx
    });

    let mut app = tui::App::new(
        schedule,
        ViewSettings::from(config),
        WeekCursor::starting_at(today),
        today,
        pending,
    );
    let result = tui::run_browser(&mut app);

    // Do not wait for an outstanding fetch.
    runtime.shutdown_background();

    result.map_err(Error::Io)
}

/// Handle `check`.
fn check_schedule(config: &Config) -> Result<()> {
    let schedule = load_schedule(config.schedule.path.as_deref())?;
    let source = config
        .schedule
        .path
        .as_ref()
        .map_or_else(|| "bundled schedule".to_string(), |p| p.display().to_string());

    let mut out = std::io::stdout().lock();
    write_check_report(&schedule, &source, weeks_in_year(week_of(calendar::today()).year), &mut out)?;
    Ok(())
}

fn write_check_report<W: Write>(
    schedule: &Schedule,
    source: &str,
    weeks_this_year: u32,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "Schedule OK: {source}")?;
    writeln!(out, "  {} week(s) with a plan", schedule.len())?;

    let missing: Vec<String> = (1..=weeks_this_year)
        .filter(|w| schedule.get(*w).is_none())
        .map(|w| w.to_string())
        .collect();
    if missing.is_empty() {
        writeln!(out, "  No missing weeks this year")?;
    } else {
        writeln!(out, "  Missing weeks: {}", missing.join(", "))?;
    }
    Ok(())
}

fn handle_config_command(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = resolve_config_path(explicit)?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_config_to(&Config::default(), explicit)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!("  Set [forecast] api_key to enable the weather forecast");
                println!("  Set [schedule] path to use your own schedule");
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            let text =
                toml::to_string_pretty(&config).map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{text}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = resolve_config_path(explicit)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
