//! Interactive week browser.

mod app;
mod theme;
mod ui;

pub use app::{App, ForecastStatus};

use std::io::{self, Write, stdout};
use std::time::Duration;

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::constants::tui::POLL_INTERVAL_MS;

/// Raw mode and the alternate screen, undone on drop (including unwinding).
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        guard.out.execute(EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        // Nothing useful can be done if restoring fails.
        let _ = disable_raw_mode();
        let _ = self.out.execute(LeaveAlternateScreen);
    }
}

/// Run the browser until the user quits.
pub fn run_browser(app: &mut App) -> io::Result<()> {
    let _guard = TerminalGuard::enter(stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    event_loop(&mut terminal, app)
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit() {
        app.poll_forecast();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}
