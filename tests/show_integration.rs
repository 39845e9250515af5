//! Integration tests for the `show` command.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const WEEK_3: &str = r#"{"3": "5km Pe 10km T lepo lepo 8km Pa 5km IV lepo"}"#;

/// Command isolated from the user's config and environment.
fn weekplan(dir: &Path, schedule: &str) -> Command {
    let schedule_path = dir.join("schedule.json");
    std::fs::write(&schedule_path, schedule).unwrap();

    let mut cmd = cargo_bin_cmd!("weekplan");
    cmd.env_remove("WEEKPLAN_API_KEY")
        .env_remove("WEEKPLAN_LOCATION")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("missing.toml"))
        .arg("--schedule")
        .arg(&schedule_path);
    cmd
}

#[test]
fn test_show_current_week() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--date", "2025-01-15", "--no-forecast"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WEEK 3 (2025)  (Current week)"))
        .stdout(predicate::str::contains("Mon 13.01."))
        .stdout(predicate::str::contains("5km Pe"))
        .stdout(predicate::str::contains("> Wed 15.01."))
        .stdout(predicate::str::contains("8km Pa"))
        .stdout(predicate::str::contains("Legend:"));
}

#[test]
fn test_default_command_is_show() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["--date", "2025-01-15", "--no-forecast"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WEEK 3 (2025)"));
}

#[test]
fn test_show_next_week_without_data() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--date", "2025-01-15", "--offset", "1", "--no-forecast"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WEEK 4 (2025)"))
        .stdout(predicate::str::contains("No data for this week"))
        .stdout(predicate::str::contains("Current week").not());
}

#[test]
fn test_show_negative_offset_crosses_year() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--week", "1", "--year", "2026", "--offset", "-1"])
        .args(["--date", "2025-01-15", "--no-forecast"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WEEK 52 (2025)"));
}

#[test]
fn test_show_json_output() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--date", "2025-01-15", "--no-forecast", "--output", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["week"]["week"], 3);
    assert_eq!(json["week"]["year"], 2025);
    assert_eq!(json["is_current_week"], true);
    assert_eq!(json["content"]["status"], "plan");
    assert_eq!(json["content"]["days"].as_array().unwrap().len(), 7);
}

#[test]
fn test_show_missing_week_53() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--week", "53", "--year", "2025", "--no-forecast"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("week 53 does not exist in 2025"));
}

#[test]
fn test_show_rejects_week_out_of_range() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--week", "54"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("week must be between 1 and 53"));
}

#[test]
fn test_malformed_plan_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), r#"{"7": "5km Pe 10km"}"#);
    cmd.args(["show", "--no-forecast"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed plan for week 7"));
}

#[test]
fn test_invalid_schedule_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), "not json");
    cmd.args(["show", "--no-forecast"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_show_without_api_key_skips_forecast() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--date", "2025-01-15"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WEEK 3 (2025)"))
        .stdout(predicate::str::contains("feels").not());
}

#[test]
fn test_show_rejects_year_beyond_calendar() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--week", "52", "--year", "2147483647", "--offset", "1"])
        .arg("--no-forecast");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("year must be between 1 and 9999"));
}

#[test]
fn test_show_rejects_huge_offset() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--offset", "2000000000", "--no-forecast"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("offset must be between"));
}

#[test]
fn test_show_last_supported_year_pages_forward() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["show", "--week", "52", "--year", "9999", "--offset", "1"])
        .args(["--date", "2025-01-15", "--no-forecast"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("WEEK 1 (10000)"));
}

#[test]
fn test_week_options_before_subcommand_rejected() {
    let dir = TempDir::new().unwrap();
    let mut cmd = weekplan(dir.path(), WEEK_3);
    cmd.args(["-w", "3", "show", "--no-forecast"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must follow the subcommand"));
}

#[test]
fn test_duplicate_week_keys_rejected() {
    let dir = TempDir::new().unwrap();
    let schedule = r#"{"3": "5km Pe 10km T lepo lepo 8km Pa 5km IV lepo", "03": "lepo lepo lepo lepo lepo lepo lepo"}"#;
    let mut cmd = weekplan(dir.path(), schedule);
    cmd.args(["show", "--no-forecast"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("week 3 appears more than once"));
}
