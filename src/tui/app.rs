//! Browser state and input handling.
//!
//! `App` owns everything the browser shows: the schedule, the week cursor and
//! the forecast. The forecast arrives asynchronously through a oneshot
//! channel that is polled once per tick, so paging never waits on it.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::calendar::WeekCursor;
use crate::forecast::ForecastSample;
use crate::schedule::Schedule;
use crate::view::{ViewSettings, WeekView};

/// Where the forecast fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastStatus {
    /// No fetch was started.
    Off,
    /// Waiting for the response.
    Loading,
    /// Response received (possibly empty).
    Ready(usize),
}

/// Application state.
pub struct App {
    schedule: Schedule,
    settings: ViewSettings,
    cursor: WeekCursor,
    today: NaiveDate,
    forecast: Vec<ForecastSample>,
    pending_forecast: Option<oneshot::Receiver<Vec<ForecastSample>>>,
    forecast_requested: bool,
    should_quit: bool,
}

impl App {
    /// Create the browser positioned on `cursor`.
    pub fn new(
        schedule: Schedule,
        settings: ViewSettings,
        cursor: WeekCursor,
        today: NaiveDate,
        pending_forecast: Option<oneshot::Receiver<Vec<ForecastSample>>>,
    ) -> Self {
        Self {
            schedule,
            settings,
            cursor,
            today,
            forecast: Vec::new(),
            forecast_requested: pending_forecast.is_some(),
            pending_forecast,
            should_quit: false,
        }
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h' | 'b') => self.cursor.back(),
            KeyCode::Right | KeyCode::Char('l' | 'f') => self.cursor.forward(),
            KeyCode::Char('t') | KeyCode::Home => self.cursor.reset(self.today),
            _ => {}
        }
    }

    /// Take the forecast if it has arrived.
    pub fn poll_forecast(&mut self) {
        let Some(rx) = self.pending_forecast.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(samples) => {
                self.forecast = samples;
                self.pending_forecast = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => self.pending_forecast = None,
        }
    }

    /// The week to draw.
    pub fn view(&self) -> WeekView {
        WeekView::build(
            &self.schedule,
            &self.cursor,
            self.today,
            &self.forecast,
            &self.settings,
        )
    }

    /// Forecast fetch state.
    pub fn forecast_status(&self) -> ForecastStatus {
        if !self.forecast_requested {
            ForecastStatus::Off
        } else if self.pending_forecast.is_some() {
            ForecastStatus::Loading
        } else {
            ForecastStatus::Ready(self.forecast.len())
        }
    }

    /// Whether the user asked to quit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current cursor.
    pub const fn cursor(&self) -> &WeekCursor {
        &self.cursor
    }
}
