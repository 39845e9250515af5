//! Forecast sample type and response parsing.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::forecast::TIMESTAMP_FORMAT;
use crate::error::{Error, Result};

/// One timestamped forecast point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSample {
    /// Date and hour the sample is for, as reported by the service.
    pub timestamp: NaiveDateTime,
    /// Air temperature.
    pub temp: f64,
    /// Apparent ("feels like") temperature.
    pub feels_like: f64,
}

impl ForecastSample {
    /// Calendar date of the sample.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Hour of day of the sample.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<RawSample>,
}

#[derive(Debug, Deserialize)]
struct RawSample {
    dt_txt: String,
    main: RawMain,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    feels_like: f64,
}

/// Parse a forecast response body.
///
/// Expects `{"list": [{"dt_txt": "YYYY-MM-DD HH:MM:SS", "main": {"temp": .., "feels_like": ..}}, ..]}`.
/// Other fields are ignored. Entries with an unreadable `dt_txt` are skipped.
///
/// # Errors
///
/// Returns [`Error::ForecastParse`] if the body does not have that shape.
pub fn parse_forecast(body: &str) -> Result<Vec<ForecastSample>> {
    let response: ForecastResponse =
        serde_json::from_str(body).map_err(|e| Error::ForecastParse { source: e })?;

    let samples = response
        .list
        .into_iter()
        .filter_map(|raw| {
            match NaiveDateTime::parse_from_str(&raw.dt_txt, TIMESTAMP_FORMAT) {
                Ok(timestamp) => Some(ForecastSample {
                    timestamp,
                    temp: raw.main.temp,
                    feels_like: raw.main.feels_like,
                }),
                Err(e) => {
                    warn!("Skipping forecast entry with bad timestamp '{}': {e}", raw.dt_txt);
                    None
                }
            }
        })
        .collect();

    Ok(samples)
}
