//! Error types for weekplan.

/// Result type alias for weekplan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for weekplan.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to read schedule file.
    #[error("failed to read schedule file '{path}'")]
    ScheduleRead {
        /// Path to the schedule file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Schedule file is not a JSON object of strings.
    #[error("failed to parse schedule '{path}'")]
    ScheduleParse {
        /// Path to the schedule file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Schedule key is not a week number.
    #[error("invalid week key '{key}' in schedule (expected 1-53)")]
    InvalidWeekKey {
        /// The offending key.
        key: String,
    },

    /// Two schedule keys name the same week (e.g. "3" and "03").
    #[error("week {week} appears more than once in schedule (keys '{first}' and '{second}')")]
    DuplicateWeek {
        /// Week number both keys resolve to.
        week: u32,
        /// Key kept from the first occurrence.
        first: String,
        /// Key that collided with it.
        second: String,
    },

    /// A week's plan string has the wrong shape.
    #[error("malformed plan for week {week}")]
    MalformedPlan {
        /// Week key of the bad entry.
        week: u32,
        /// What was wrong with it.
        #[source]
        source: crate::schedule::PlanFormatError,
    },

    /// Requested week does not exist in the given ISO year.
    #[error("week {week} does not exist in {year}")]
    WeekOutOfRange {
        /// ISO week-year.
        year: i32,
        /// Requested week number.
        week: u32,
    },

    /// Forecast request failed.
    #[error("failed to fetch forecast from '{url}'")]
    ForecastFetch {
        /// URL that failed (API key redacted).
        url: String,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Forecast response did not have the expected shape.
    #[error("unexpected forecast response")]
    ForecastParse {
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON output")]
    JsonOutput {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
