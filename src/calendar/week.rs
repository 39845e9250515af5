//! ISO-8601 week numbering and week/weekday to date mapping.

use chrono::{Datelike, IsoWeek, NaiveDate, TimeDelta, Weekday};
use serde::Serialize;

use crate::constants::calendar::{DAYS_PER_WEEK, MAX_WEEK, MAX_WEEKDAY_INDEX, MIN_WEEK};

/// An ISO week: the ISO week-year and the week number within it.
///
/// The week-year differs from the calendar year for a few days around
/// New Year (e.g. 2024-12-30 is in week 1 of 2025).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct IsoWeekId {
    /// ISO week-year.
    pub year: i32,
    /// Week number (1-52, or 1-53 in long years).
    pub week: u32,
}

impl IsoWeekId {
    /// Build a week id, returning `None` if the week does not exist in `year`.
    pub fn new(year: i32, week: u32) -> Option<Self> {
        (MIN_WEEK..=weeks_in_year(year))
            .contains(&week)
            .then_some(Self { year, week })
    }
}

impl From<IsoWeek> for IsoWeekId {
    fn from(week: IsoWeek) -> Self {
        Self {
            year: week.year(),
            week: week.week(),
        }
    }
}

impl std::fmt::Display for IsoWeekId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Compute the ISO week containing `date`.
///
/// Moves the date to the Thursday of its week (Monday = 1 .. Sunday = 7,
/// offset `4 - day`), then counts whole weeks from January 1st of that
/// Thursday's year: `ceil((days_since_jan1 + 1) / 7)`.
pub fn week_of(date: NaiveDate) -> IsoWeekId {
    let iso_day = i64::from(date.weekday().number_from_monday());
    let Some(thursday) = date.checked_add_signed(TimeDelta::days(4 - iso_day)) else {
        // Only reachable at the edges of the representable range.
        return date.iso_week().into();
    };

    let days_since_year_start = thursday.ordinal0();
    IsoWeekId {
        year: thursday.year(),
        week: days_since_year_start / DAYS_PER_WEEK + 1,
    }
}

/// Number of ISO weeks in `iso_year` (52 or 53).
pub fn weeks_in_year(iso_year: i32) -> u32 {
    // December 28th always falls in the last ISO week of its year.
    NaiveDate::from_ymd_opt(iso_year, 12, 28).map_or(52, |d| d.iso_week().week())
}

/// Map a weekday index (0 = Sunday, 1-6 = Monday-Saturday) to a `Weekday`.
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

/// Inverse of [`weekday_from_index`].
#[allow(clippy::cast_possible_truncation)]
pub fn weekday_index(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

/// Calendar date of a weekday within an ISO week.
///
/// Sunday (index 0) is the last day of the ISO week, six days after Monday.
/// Returns `None` if the index is above 6 or the week does not exist in its
/// year (week 0, or week 53 of a 52-week year).
pub fn date_for(week: IsoWeekId, weekday_index: u8) -> Option<NaiveDate> {
    if weekday_index > MAX_WEEKDAY_INDEX || !(MIN_WEEK..=MAX_WEEK).contains(&week.week) {
        return None;
    }
    let weekday = weekday_from_index(weekday_index)?;
    NaiveDate::from_isoywd_opt(week.year, week.week, weekday)
}
