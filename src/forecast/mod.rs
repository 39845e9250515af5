//! Weather forecast: retrieval, parsing and per-day selection.

mod client;
mod filter;
mod types;

pub use client::{ForecastRequest, fetch_forecast};
pub use filter::{DailySummary, daily_summary, samples_for_date};
pub use types::{ForecastSample, parse_forecast};
