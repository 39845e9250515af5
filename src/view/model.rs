//! The displayed week, independent of how it is drawn.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::calendar::{IsoWeekId, WeekCursor, date_for, weekday_index};
use crate::config::{Config, Units};
use crate::forecast::{DailySummary, ForecastSample, daily_summary, samples_for_date};
use crate::schedule::{DayKind, Schedule};

/// Display settings taken from configuration.
#[derive(Debug, Clone)]
pub struct ViewSettings {
    /// Days shown as strength days.
    pub strength_days: Vec<Weekday>,
    /// Abbreviation legend.
    pub legend: BTreeMap<String, String>,
    /// Temperature units of the forecast.
    pub units: Units,
}

impl From<&Config> for ViewSettings {
    fn from(config: &Config) -> Self {
        Self {
            strength_days: config.schedule.strength_days.clone(),
            legend: config.legend.clone(),
            units: config.forecast.units,
        }
    }
}

/// Everything needed to draw one week.
#[derive(Debug, Clone, Serialize)]
pub struct WeekView {
    /// The displayed week.
    pub week: IsoWeekId,
    /// Whether this is the week containing today.
    pub is_current_week: bool,
    /// Day cards, or the empty state.
    pub content: WeekContent,
    /// Abbreviation legend.
    pub legend: BTreeMap<String, String>,
    /// Temperature units.
    pub units: Units,
}

/// What the week shows.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeekContent {
    /// The schedule has a plan for this week.
    Plan {
        /// Monday through Sunday.
        days: Vec<DayCard>,
    },
    /// The schedule has no entry for this week number.
    NoData,
}

/// One day of the displayed week.
#[derive(Debug, Clone, Serialize)]
pub struct DayCard {
    /// Day of the week.
    pub weekday: Weekday,
    /// Plan text.
    pub plan: String,
    /// Session classification.
    pub kind: DayKind,
    /// Calendar date, if the week exists in its year.
    pub date: Option<NaiveDate>,
    /// Whether this card is today.
    pub is_today: bool,
    /// Forecast samples for this date.
    pub forecast: Vec<ForecastSample>,
    /// Temperature range of `forecast`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<DailySummary>,
}

impl WeekView {
    /// Assemble the view for the cursor's week.
    pub fn build(
        schedule: &Schedule,
        cursor: &WeekCursor,
        today: NaiveDate,
        forecast: &[ForecastSample],
        settings: &ViewSettings,
    ) -> Self {
        let week = cursor.week();

        let content = schedule.get(week.week).map_or(WeekContent::NoData, |plan| {
            let days = plan
                .days_monday_first()
                .map(|(weekday, text)| {
                    let date = date_for(week, weekday_index(weekday));
                    let samples: Vec<ForecastSample> = samples_for_date(forecast, date)
                        .into_iter()
                        .cloned()
                        .collect();
                    let summary = daily_summary(&samples.iter().collect::<Vec<_>>());
                    DayCard {
                        weekday,
                        plan: text.to_string(),
                        kind: DayKind::classify(weekday, text, &settings.strength_days),
                        date,
                        is_today: date == Some(today),
                        forecast: samples,
                        summary,
                    }
                })
                .collect();
            WeekContent::Plan { days }
        });

        Self {
            week,
            is_current_week: cursor.is_current(today),
            content,
            legend: settings.legend.clone(),
            units: settings.units,
        }
    }

    /// Day cards, empty for a week without data.
    pub fn days(&self) -> &[DayCard] {
        match &self.content {
            WeekContent::Plan { days } => days,
            WeekContent::NoData => &[],
        }
    }

    /// Whether the schedule had no entry for this week.
    pub fn is_empty(&self) -> bool {
        matches!(self.content, WeekContent::NoData)
    }
}
