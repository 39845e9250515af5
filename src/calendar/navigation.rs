//! Week paging state.

use chrono::NaiveDate;

use super::week::{IsoWeekId, week_of, weeks_in_year};

/// The week currently being displayed.
///
/// Paging wraps across year boundaries: forward from the last ISO week of a
/// year lands on week 1 of the next year, back from week 1 lands on the last
/// week (52 or 53) of the previous year. The cursor never holds a week that
/// does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekCursor {
    week: IsoWeekId,
}

impl WeekCursor {
    /// Cursor positioned on the week containing `today`.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            week: week_of(today),
        }
    }

    /// Cursor positioned on an explicit, already validated week.
    pub const fn at(week: IsoWeekId) -> Self {
        Self { week }
    }

    /// The displayed week.
    pub const fn week(&self) -> IsoWeekId {
        self.week
    }

    /// Move to the next week. Stays put on the last week of `i32::MAX`.
    pub fn forward(&mut self) {
        let IsoWeekId { year, week } = self.week;
        if week < weeks_in_year(year) {
            self.week.week = week + 1;
        } else if let Some(next_year) = year.checked_add(1) {
            self.week = IsoWeekId {
                year: next_year,
                week: 1,
            };
        }
    }

    /// Move to the previous week. Stays put on week 1 of `i32::MIN`.
    pub fn back(&mut self) {
        let IsoWeekId { year, week } = self.week;
        if week > 1 {
            self.week.week = week - 1;
        } else if let Some(prev_year) = year.checked_sub(1) {
            self.week = IsoWeekId {
                year: prev_year,
                week: weeks_in_year(prev_year),
            };
        }
    }

    /// Move `steps` weeks; negative values move back.
    pub fn shift(&mut self, steps: i32) {
        for _ in 0..steps.unsigned_abs() {
            if steps > 0 {
                self.forward();
            } else {
                self.back();
            }
        }
    }

    /// Jump back to the week containing `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        self.week = week_of(today);
    }

    /// Whether the cursor is on the week containing `today`.
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.week == week_of(today)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cursor(year: i32, week: u32) -> WeekCursor {
        WeekCursor::at(IsoWeekId::new(year, week).unwrap())
    }

    #[test]
    fn test_forward_within_year() {
        let mut c = cursor(2025, 3);
        c.forward();
        assert_eq!(c.week(), IsoWeekId { year: 2025, week: 4 });
    }

    #[test]
    fn test_forward_from_week_52_wraps_in_short_year() {
        let mut c = cursor(2025, 52);
        c.forward();
        assert_eq!(c.week(), IsoWeekId { year: 2026, week: 1 });
    }

    #[test]
    fn test_forward_from_week_52_reaches_53_in_long_year() {
        let mut c = cursor(2026, 52);
        c.forward();
        assert_eq!(c.week(), IsoWeekId { year: 2026, week: 53 });
        c.forward();
        assert_eq!(c.week(), IsoWeekId { year: 2027, week: 1 });
    }

    #[test]
    fn test_back_from_week_one_wraps() {
        let mut c = cursor(2026, 1);
        c.back();
        assert_eq!(c.week(), IsoWeekId { year: 2025, week: 52 });

        let mut c = cursor(2027, 1);
        c.back();
        assert_eq!(c.week(), IsoWeekId { year: 2026, week: 53 });
    }

    #[test]
    fn test_shift_and_reset() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut c = WeekCursor::starting_at(today);
        assert!(c.is_current(today));

        c.shift(-5);
        assert_eq!(c.week(), IsoWeekId { year: 2024, week: 50 });
        assert!(!c.is_current(today));

        c.shift(5);
        assert!(c.is_current(today));

        c.shift(2);
        c.reset(today);
        assert_eq!(c.week(), IsoWeekId { year: 2025, week: 3 });
    }

    #[test]
    fn test_paging_stops_at_representable_years() {
        let mut c = cursor(i32::MAX, 52);
        c.forward();
        assert_eq!(c.week(), IsoWeekId { year: i32::MAX, week: 52 });
        c.back();
        assert_eq!(c.week(), IsoWeekId { year: i32::MAX, week: 51 });

        let mut c = cursor(i32::MIN, 1);
        c.back();
        assert_eq!(c.week(), IsoWeekId { year: i32::MIN, week: 1 });
        c.forward();
        assert_eq!(c.week(), IsoWeekId { year: i32::MIN, week: 2 });
    }

    #[test]
    fn test_week_never_leaves_valid_range() {
        let mut c = cursor(2025, 1);
        for _ in 0..200 {
            c.back();
            assert!(IsoWeekId::new(c.week().year, c.week().week).is_some());
        }
        for _ in 0..400 {
            c.forward();
            assert!(IsoWeekId::new(c.week().year, c.week().week).is_some());
        }
    }
}
