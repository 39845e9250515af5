//! CLI argument validators.

use chrono::NaiveDate;

use crate::constants::calendar::{MAX_OFFSET_WEEKS, MAX_WEEK, MAX_YEAR, MIN_WEEK, MIN_YEAR};

/// Parse and validate a week number (1-53).
///
/// Whether week 53 exists depends on the year and is checked later.
pub fn parse_week(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid week number"))?;

    if !(MIN_WEEK..=MAX_WEEK).contains(&value) {
        return Err(format!(
            "week must be between {MIN_WEEK} and {MAX_WEEK}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse and validate an ISO week-year.
pub fn parse_year(s: &str) -> Result<i32, String> {
    let value: i32 = s.parse().map_err(|_| format!("'{s}' is not a valid year"))?;

    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(format!(
            "year must be between {MIN_YEAR} and {MAX_YEAR}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse a week offset, bounded to +/- `MAX_OFFSET_WEEKS`.
pub fn parse_offset(s: &str) -> Result<i32, String> {
    let value: i32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid week offset"))?;

    if value.unsigned_abs() > MAX_OFFSET_WEEKS.unsigned_abs() {
        return Err(format!(
            "offset must be between -{MAX_OFFSET_WEEKS} and {MAX_OFFSET_WEEKS}, got {value}"
        ));
    }

    Ok(value)
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("'{s}' is not a valid date (expected YYYY-MM-DD): {e}"))
}
