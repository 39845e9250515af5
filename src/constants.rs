//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "weekplan";

/// Plan string layout.
pub mod plan {
    /// Tokens in a raw week entry: six Mon-Sat pairs plus one Sunday token.
    pub const TOKEN_COUNT: usize = 13;

    /// Tokens per Monday-Saturday day.
    pub const TOKENS_PER_DAY: usize = 2;

    /// Separator between tokens. Exactly one space, no collapsing.
    pub const SEPARATOR: char = ' ';

    /// Marks a rest day ("lepo" is Finnish for rest).
    pub const REST_KEYWORD: &str = "lepo";

    /// Marks a run with a distance.
    pub const RUN_MARKER: &str = "km";

    /// Marks a race-pace session. Case-sensitive so "km" never matches.
    pub const RACE_MARKER: char = 'K';
}

/// Calendar constants.
pub mod calendar {
    /// Days in a week.
    pub const DAYS_PER_WEEK: u32 = 7;

    /// Lowest week number.
    pub const MIN_WEEK: u32 = 1;

    /// Highest week number any ISO year can have.
    pub const MAX_WEEK: u32 = 53;

    /// Highest weekday index (0 = Sunday, 6 = Saturday).
    pub const MAX_WEEKDAY_INDEX: u8 = 6;

    /// Lowest year accepted on the command line.
    pub const MIN_YEAR: i32 = 1;

    /// Highest year accepted on the command line.
    pub const MAX_YEAR: i32 = 9999;

    /// Largest `--offset` in either direction (about a century of weeks).
    pub const MAX_OFFSET_WEEKS: i32 = 5300;
}

/// Weather forecast defaults.
pub mod forecast {
    /// 5-day / 3-hour forecast endpoint.
    pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/forecast";

    /// Default forecast location.
    pub const DEFAULT_LOCATION: &str = "Helsinki";

    /// Connect timeout in seconds.
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;

    /// Default overall request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Format of the `dt_txt` field.
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Interactive browser settings.
pub mod tui {
    /// Input poll interval in milliseconds.
    pub const POLL_INTERVAL_MS: u64 = 100;
}

/// Schedule bundled into the binary, used when no file is configured.
pub const BUNDLED_SCHEDULE: &str = include_str!("../data/schedule.json");
