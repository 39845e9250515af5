//! Calendar arithmetic: ISO weeks, weekday dates and week paging.

mod navigation;
mod week;

pub use navigation::WeekCursor;
pub use week::{
    IsoWeekId, date_for, week_of, weekday_from_index, weekday_index, weeks_in_year,
};

/// Today's date in the local time zone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
