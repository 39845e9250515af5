//! Frame drawing.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::app::{App, ForecastStatus};
use super::theme;
use crate::config::Units;
use crate::view::{DayCard, NO_DATA_MESSAGE, WeekView};

/// Draw the whole browser.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let area = frame.area();

    // Header, content, bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(header(&view), main_layout[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(main_layout[1]);

    if view.is_empty() {
        let empty = Paragraph::new(NO_DATA_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme::TEXT_SECONDARY))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme::BORDER_DEFAULT)));
        frame.render_widget(empty, panels[0]);
    } else {
        draw_days(frame, &view, panels[0]);
    }

    frame.render_widget(legend(&view, app.forecast_status()), panels[1]);

    let keybindings = Paragraph::new(" ←/h: Back | →/l: Forward | t: This week | q: Quit ")
        .style(Style::default().fg(theme::BG_PRIMARY).bg(theme::SUNDAY));
    frame.render_widget(keybindings, main_layout[2]);
}

fn header(view: &WeekView) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        format!("WEEK {} ({})", view.week.week, view.week.year),
        Style::default()
            .fg(theme::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )];
    if view.is_current_week {
        spans.push(Span::styled(
            "  (Current week)",
            Style::default().fg(theme::TODAY),
        ));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(theme::BORDER_DEFAULT)))
}

fn draw_days(frame: &mut Frame, view: &WeekView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(view.days().iter().map(|_| Constraint::Ratio(1, 7)))
        .split(area);

    for (day, row) in view.days().iter().zip(rows.iter()) {
        frame.render_widget(day_card(day, view.units), *row);
    }
}

fn day_card(day: &DayCard, units: Units) -> Paragraph<'static> {
    let border = if day.is_today {
        theme::TODAY
    } else if day.kind.rest {
        theme::REST
    } else if day.kind.strength {
        theme::STRENGTH
    } else if day.weekday == chrono::Weekday::Sun {
        theme::SUNDAY
    } else {
        theme::BORDER_DEFAULT
    };

    let title = match day.date {
        Some(date) => format!(" {} {} ", day.weekday, date.format("%d.%m.")),
        None => format!(" {} ", day.weekday),
    };

    let mut spans = Vec::new();
    if day.kind.rest {
        spans.push(Span::styled(
            "LEPO",
            Style::default().fg(theme::REST).add_modifier(Modifier::BOLD),
        ));
    } else {
        if day.kind.strength {
            spans.push(Span::styled("🏋 ", Style::default().fg(theme::STRENGTH)));
        }
        if day.kind.run {
            let color = if day.kind.race { theme::RACE } else { theme::TEXT_PRIMARY };
            spans.push(Span::styled("🏃 ", Style::default().fg(color)));
        }
        spans.push(Span::styled(
            day.plan.clone(),
            Style::default().fg(theme::TEXT_PRIMARY),
        ));
    }

    if let Some(summary) = day.summary {
        let suffix = units.temperature_suffix();
        spans.push(Span::styled(
            format!(
                "   {:.0}..{:.0}{suffix} (feels {:.0}{suffix})",
                summary.min, summary.max, summary.feels_like_min
            ),
            Style::default().fg(theme::TEXT_SECONDARY),
        ));
    }

    let mut lines = vec![Line::from(spans)];
    if !day.forecast.is_empty() {
        let suffix = units.temperature_suffix();
        let hourly = day
            .forecast
            .iter()
            .map(|s| format!("{:02}:00 {:.0}{suffix}", s.hour(), s.temp))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(Line::from(Span::styled(
            hourly,
            Style::default().fg(theme::TEXT_MUTED),
        )));
    }

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if day.is_today {
        block = block.style(Style::default().bg(theme::BG_TODAY));
    }

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(block)
}

fn legend(view: &WeekView, status: ForecastStatus) -> Paragraph<'static> {
    let mut lines: Vec<Line<'static>> = view
        .legend
        .iter()
        .map(|(abbr, meaning)| {
            Line::from(vec![
                Span::styled(
                    format!("{abbr:<3}"),
                    Style::default()
                        .fg(theme::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {meaning}"),
                    Style::default().fg(theme::TEXT_SECONDARY),
                ),
            ])
        })
        .collect();

    let status_text = match status {
        ForecastStatus::Off => "Forecast: off".to_string(),
        ForecastStatus::Loading => "Forecast: loading...".to_string(),
        ForecastStatus::Ready(0) => "Forecast: unavailable".to_string(),
        ForecastStatus::Ready(n) => format!("Forecast: {n} samples"),
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        status_text,
        Style::default().fg(theme::TEXT_MUTED),
    )));

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Legend ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::BORDER_DEFAULT)),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calendar::WeekCursor;
    use crate::config::Config;
    use crate::schedule::Schedule;
    use crate::view::ViewSettings;
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use std::path::Path;

    fn screen(step: i32) -> String {
        let schedule = Schedule::from_json(
            r#"{"3": "5km Pe 10km T lepo lepo 8km Pa 5km IV lepo"}"#,
            Path::new("t.json"),
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let mut cursor = WeekCursor::starting_at(today);
        cursor.shift(step);
        let app = App::new(
            schedule,
            ViewSettings::from(&Config::default()),
            cursor,
            today,
            None,
        );

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_week_with_days() {
        let text = screen(0);
        assert!(text.contains("WEEK 3 (2025)"));
        assert!(text.contains("(Current week)"));
        assert!(text.contains("10km T"));
        assert!(text.contains("LEPO"));
        assert!(text.contains("Legend"));
        assert!(text.contains("Forecast: off"));
    }

    #[test]
    fn test_draws_no_data_state() {
        let text = screen(1);
        assert!(text.contains("WEEK 4 (2025)"));
        assert!(text.contains(NO_DATA_MESSAGE));
    }
}
