//! Configuration type definitions.

use crate::constants::forecast::{
    DEFAULT_ENDPOINT, DEFAULT_LOCATION, DEFAULT_TIMEOUT_SECS,
};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schedule source and display settings.
    pub schedule: ScheduleConfig,

    /// Weather forecast settings.
    pub forecast: ForecastConfig,

    /// Abbreviations used in plan entries and what they mean.
    pub legend: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: ScheduleConfig::default(),
            forecast: ForecastConfig::default(),
            legend: default_legend(),
        }
    }
}

/// Session abbreviations used by the bundled schedule (Finnish).
pub fn default_legend() -> BTreeMap<String, String> {
    [
        ("Pa", "Palauttava harjoitus"),
        ("Pe", "Peruskuntoharjoitus"),
        ("M", "Mäkinen harjoitus"),
        ("T", "Tempoharjoitus"),
        ("K", "Kilpailuvauhtinen harjoitus"),
        ("IV", "Intervalliharjoitus"),
        ("Ve", "Vaihtoehtoinen harjoittelu"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Schedule settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Path to a schedule JSON file. The bundled schedule is used if unset.
    pub path: Option<PathBuf>,

    /// Weekdays shown as strength training days.
    pub strength_days: Vec<Weekday>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            path: None,
            strength_days: vec![Weekday::Mon],
        }
    }
}

/// Weather forecast settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Fetch and show the forecast.
    pub enabled: bool,

    /// Forecast API endpoint.
    pub endpoint: String,

    /// API key. The forecast is skipped when unset.
    pub api_key: Option<String>,

    /// City name passed to the API.
    pub location: String,

    /// Unit system for temperatures.
    pub units: Units,

    /// Overall request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            location: DEFAULT_LOCATION.to_string(),
            units: Units::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Temperature unit system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius.
    #[default]
    Metric,
    /// Fahrenheit.
    Imperial,
    /// Kelvin.
    Standard,
}

impl Units {
    /// Suffix for displayed temperatures.
    pub const fn temperature_suffix(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Standard => "K",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
            Self::Standard => write!(f, "standard"),
        }
    }
}

impl std::str::FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Ok(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(Self::Imperial),
            "standard" | "k" | "kelvin" => Ok(Self::Standard),
            other => Err(format!("unknown unit system: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_from_str() {
        assert_eq!("metric".parse::<Units>().ok(), Some(Units::Metric));
        assert_eq!("F".parse::<Units>().ok(), Some(Units::Imperial));
        assert_eq!("kelvin".parse::<Units>().ok(), Some(Units::Standard));
        assert!("furlongs".parse::<Units>().is_err());
    }

    #[test]
    fn test_units_display() {
        assert_eq!(Units::Metric.to_string(), "metric");
        assert_eq!(Units::Imperial.temperature_suffix(), "°F");
    }

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert!(config.schedule.path.is_none());
        assert_eq!(config.schedule.strength_days, vec![Weekday::Mon]);
        assert!(config.forecast.enabled);
        assert!(config.forecast.api_key.is_none());
        assert_eq!(config.forecast.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.legend.len(), 7);
        assert_eq!(config.legend.get("IV").map(String::as_str), Some("Intervalliharjoitus"));
    }
}
