//! Plain-text rendering of a week.

use std::io::{self, Write};

use super::model::{DayCard, WeekView};
use crate::config::Units;

/// Shown in place of the plan on rest days.
const REST_LABEL: &str = "LEPO";

/// Message for weeks the schedule has no entry for.
pub const NO_DATA_MESSAGE: &str = "No data for this week";

/// Write the week as human-readable text.
pub fn render_text<W: Write>(view: &WeekView, out: &mut W) -> io::Result<()> {
    write!(out, "WEEK {} ({})", view.week.week, view.week.year)?;
    if view.is_current_week {
        write!(out, "  (Current week)")?;
    }
    writeln!(out)?;
    writeln!(out)?;

    if view.is_empty() {
        writeln!(out, "  {NO_DATA_MESSAGE}")?;
        return Ok(());
    }

    for day in view.days() {
        render_day(day, view.units, out)?;
    }

    if !view.legend.is_empty() {
        writeln!(out)?;
        writeln!(out, "Legend:")?;
        let width = view.legend.keys().map(String::len).max().unwrap_or(0);
        for (abbr, meaning) in &view.legend {
            writeln!(out, "  {abbr:<width$}  {meaning}")?;
        }
    }

    Ok(())
}

fn render_day<W: Write>(day: &DayCard, units: Units, out: &mut W) -> io::Result<()> {
    let marker = if day.is_today { '>' } else { ' ' };
    let date = day
        .date
        .map_or_else(|| "      ".to_string(), |d| d.format("%d.%m.").to_string());
    let plan = if day.kind.rest {
        REST_LABEL
    } else {
        day.plan.as_str()
    };

    write!(
        out,
        "{marker} {} {date}  {:<12} {plan}",
        day.weekday,
        tags(day)
    )?;

    if let Some(summary) = day.summary {
        let suffix = units.temperature_suffix();
        write!(
            out,
            "   {:.0}..{:.0}{suffix} (feels {:.0}{suffix})",
            summary.min, summary.max, summary.feels_like_min
        )?;
    }
    writeln!(out)?;

    for sample in &day.forecast {
        let suffix = units.temperature_suffix();
        writeln!(
            out,
            "        {:02}:00  {:>5.1}{suffix}  feels {:>5.1}{suffix}",
            sample.hour(),
            sample.temp,
            sample.feels_like
        )?;
    }

    Ok(())
}

/// Bracketed session tags, e.g. `[gym][run]`.
fn tags(day: &DayCard) -> String {
    let kind = day.kind;
    [
        (kind.strength, "[gym]"),
        (kind.run, "[run]"),
        (kind.race, "[race]"),
    ]
    .into_iter()
    .filter_map(|(on, tag)| on.then_some(tag))
    .collect()
}
