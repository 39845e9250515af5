//! Selecting forecast samples for a day.

use chrono::NaiveDate;
use serde::Serialize;

use super::types::ForecastSample;

/// Samples whose calendar date equals `target`, in input order.
///
/// The hour is ignored for matching. `None` selects nothing.
pub fn samples_for_date(
    samples: &[ForecastSample],
    target: Option<NaiveDate>,
) -> Vec<&ForecastSample> {
    let Some(target) = target else {
        return Vec::new();
    };
    samples.iter().filter(|s| s.date() == target).collect()
}

/// Temperature range over one day's samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySummary {
    /// Lowest temperature.
    pub min: f64,
    /// Highest temperature.
    pub max: f64,
    /// Lowest apparent temperature.
    pub feels_like_min: f64,
}

/// Summarize a day's samples, or `None` if there are none.
pub fn daily_summary(samples: &[&ForecastSample]) -> Option<DailySummary> {
    let (first, rest) = samples.split_first()?;
    let init = DailySummary {
        min: first.temp,
        max: first.temp,
        feels_like_min: first.feels_like,
    };
    Some(rest.iter().fold(init, |acc, s| DailySummary {
        min: acc.min.min(s.temp),
        max: acc.max.max(s.temp),
        feels_like_min: acc.feels_like_min.min(s.feels_like),
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn sample(ts: &str, temp: f64) -> ForecastSample {
        ForecastSample {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            temp,
            feels_like: temp - 3.0,
        }
    }

    fn samples() -> Vec<ForecastSample> {
        vec![
            sample("2024-03-03 21:00:00", 0.0),
            sample("2024-03-04 00:00:00", 1.0),
            sample("2024-03-04 09:00:00", 4.0),
            sample("2024-03-05 00:00:00", 2.0),
            sample("2024-03-04 21:00:00", -1.0),
        ]
    }

    #[test]
    fn test_filters_by_date_preserving_order() {
        let all = samples();
        let target = NaiveDate::from_ymd_opt(2024, 3, 4);
        let day = samples_for_date(&all, target);
        let temps: Vec<f64> = day.iter().map(|s| s.temp).collect();
        assert_eq!(temps, vec![1.0, 4.0, -1.0]);
        assert!(day.iter().all(|s| Some(s.date()) == target));
    }

    #[test]
    fn test_no_target_selects_nothing() {
        assert!(samples_for_date(&samples(), None).is_empty());
    }

    #[test]
    fn test_date_outside_forecast_selects_nothing() {
        let target = NaiveDate::from_ymd_opt(2024, 4, 1);
        assert!(samples_for_date(&samples(), target).is_empty());
    }

    #[test]
    fn test_daily_summary() {
        let all = samples();
        let day = samples_for_date(&all, NaiveDate::from_ymd_opt(2024, 3, 4));
        let summary = daily_summary(&day).unwrap();
        assert_eq!(summary.min, -1.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.feels_like_min, -4.0);
        assert!(daily_summary(&[]).is_none());
    }
}
