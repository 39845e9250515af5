//! Week view model and its text/JSON renderers.

mod model;
mod text;

pub use model::{DayCard, ViewSettings, WeekContent, WeekView};
pub use text::{NO_DATA_MESSAGE, render_text};

use crate::error::{Error, Result};
use std::io::Write;

/// Write the week as pretty-printed JSON.
pub fn render_json<W: Write>(view: &WeekView, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, view).map_err(|e| Error::JsonOutput { source: e })?;
    writeln!(out)?;
    Ok(())
}
