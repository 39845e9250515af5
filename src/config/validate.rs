//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_forecast(config)?;
    validate_schedule(config)?;
    Ok(())
}

/// Validate forecast settings.
fn validate_forecast(config: &Config) -> Result<()> {
    let forecast = &config.forecast;

    if forecast.timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            message: "forecast.timeout_secs must be at least 1".to_string(),
        });
    }

    if reqwest::Url::parse(&forecast.endpoint).is_err() {
        return Err(Error::ConfigValidation {
            message: format!("forecast.endpoint is not a valid URL: {}", forecast.endpoint),
        });
    }

    if forecast.location.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "forecast.location must not be empty".to_string(),
        });
    }

    if let Some(ref key) = forecast.api_key
        && key.trim().is_empty()
    {
        return Err(Error::ConfigValidation {
            message: "forecast.api_key is set but empty (remove it to disable)".to_string(),
        });
    }

    Ok(())
}

/// Validate schedule settings.
fn validate_schedule(config: &Config) -> Result<()> {
    let days = &config.schedule.strength_days;
    for (i, day) in days.iter().enumerate() {
        if days[..i].contains(day) {
            return Err(Error::ConfigValidation {
                message: format!("schedule.strength_days lists {day} twice"),
            });
        }
    }
    Ok(())
}
