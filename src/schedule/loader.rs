//! Schedule loading and validation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::plan::WeekPlan;
use crate::constants::BUNDLED_SCHEDULE;
use crate::constants::calendar::{MAX_WEEK, MIN_WEEK};
use crate::error::{Error, Result};

/// Week plans keyed by week number.
///
/// Every entry is parsed when the schedule is loaded, so a `Schedule` never
/// holds a malformed plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    weeks: BTreeMap<u32, WeekPlan>,
}

impl Schedule {
    /// Parse a schedule from JSON of the form `{"1": "<entry>", ...}`.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an object of strings, a key is not
    /// a week number in 1-53, or an entry fails to parse.
    pub fn from_json(content: &str, origin: &Path) -> Result<Self> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(content).map_err(|e| Error::ScheduleParse {
                path: origin.to_path_buf(),
                source: e,
            })?;

        let mut weeks = BTreeMap::new();
        let mut keys: BTreeMap<u32, String> = BTreeMap::new();
        for (key, entry) in raw {
            let week = parse_week_key(&key)?;
            if let Some(first) = keys.get(&week) {
                return Err(Error::DuplicateWeek {
                    week,
                    first: first.clone(),
                    second: key,
                });
            }
            let plan =
                WeekPlan::parse(&entry).map_err(|e| Error::MalformedPlan { week, source: e })?;
            weeks.insert(week, plan);
            keys.insert(week, key);
        }

        Ok(Self { weeks })
    }

    /// Plan for a week, or `None` if the schedule has no entry for it.
    pub fn get(&self, week: u32) -> Option<&WeekPlan> {
        self.weeks.get(&week)
    }

    /// Week numbers with a plan, ascending.
    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.weeks.keys().copied()
    }

    /// Number of weeks with a plan.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Whether the schedule has no weeks at all.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

/// Validate a JSON key as a week number.
fn parse_week_key(key: &str) -> Result<u32> {
    key.trim()
        .parse::<u32>()
        .ok()
        .filter(|w| (MIN_WEEK..=MAX_WEEK).contains(w))
        .ok_or_else(|| Error::InvalidWeekKey {
            key: key.to_string(),
        })
}

/// Load the schedule from `path`, or the bundled schedule if `None`.
pub fn load_schedule(path: Option<&Path>) -> Result<Schedule> {
    match path {
        Some(path) => load_from_file(path),
        None => {
            debug!("Using bundled schedule");
            Schedule::from_json(BUNDLED_SCHEDULE, Path::new("bundled://schedule.json"))
        }
    }
}

/// Load schedule from a JSON file.
fn load_from_file(path: &Path) -> Result<Schedule> {
    debug!("Loading schedule: {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| Error::ScheduleRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Schedule::from_json(&content, path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn origin() -> PathBuf {
        PathBuf::from("test.json")
    }

    #[test]
    fn test_from_json_parses_all_weeks() {
        let json = r#"{
            "3": "5km Pe 10km T lepo lepo 8km Pa 5km IV lepo",
            "10": "kuntosali 45min 8km Pe 6km Pa 10km T 8km Pa 12km M 20km"
        }"#;
        let schedule = Schedule::from_json(json, &origin()).unwrap();
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.weeks().collect::<Vec<_>>(), vec![3, 10]);
        assert_eq!(schedule.get(3).unwrap().day(Weekday::Fri), "8km Pa");
        assert!(schedule.get(4).is_none());
    }

    #[test]
    fn test_malformed_entry_names_week() {
        let json = r#"{"7": "a b c d e f g h i j k sun"}"#;
        let err = Schedule::from_json(json, &origin()).unwrap_err();
        assert!(matches!(err, Error::MalformedPlan { week: 7, .. }));
        assert_eq!(err.to_string(), "malformed plan for week 7");
    }

    #[test]
    fn test_invalid_week_keys() {
        for key in ["0", "54", "abc", "-1"] {
            let json = format!(r#"{{"{key}": "lepo lepo lepo lepo lepo lepo lepo"}}"#);
            let err = Schedule::from_json(&json, &origin()).unwrap_err();
            assert!(
                matches!(err, Error::InvalidWeekKey { .. }),
                "key {key} should be rejected"
            );
        }
    }

    #[test]
    fn test_keys_naming_same_week_rejected() {
        const REST_WEEK: &str = "lepo lepo lepo lepo lepo lepo lepo";
        for (a, b) in [("3", "03"), (" 3", "+3"), ("7", "007")] {
            let json = format!(r#"{{"{a}": "{REST_WEEK}", "{b}": "5km Pe 10km T lepo lepo 8km Pa 5km IV lepo"}}"#);
            let err = Schedule::from_json(&json, &origin()).unwrap_err();
            assert!(
                matches!(err, Error::DuplicateWeek { .. }),
                "keys {a:?} and {b:?} should collide, got {err}"
            );
            assert!(err.to_string().contains("more than once"));
        }
    }

    #[test]
    fn test_non_string_values_rejected() {
        let err = Schedule::from_json(r#"{"1": 5}"#, &origin()).unwrap_err();
        assert!(matches!(err, Error::ScheduleParse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"1": "lepo lepo lepo lepo lepo lepo lepo"}}"#).unwrap();

        let schedule = load_schedule(Some(file.path())).unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get(1).unwrap().day(Weekday::Sun), "lepo");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = load_schedule(Some(Path::new("/nonexistent/schedule.json"))).unwrap_err();
        assert!(matches!(err, Error::ScheduleRead { .. }));
    }

    #[test]
    fn test_bundled_schedule_parses() {
        let schedule = load_schedule(None).unwrap();
        assert_eq!(schedule.len(), 52);
        assert!(schedule.weeks().all(|w| (1..=52).contains(&w)));
    }
}
