//! Week plan parsing and day classification.
//!
//! A raw week entry is a single line of space-separated tokens. The
//! canonical form has exactly 13 tokens: six Monday-Saturday pairs followed
//! by one Sunday token, e.g.
//!
//! ```text
//! kuntosali 45min 8km Pe 6km Pa 10km T 8km Pa 12km M 20km
//! ```
//!
//! Entries that are not 13 tokens long may abbreviate a Monday-Saturday rest
//! day to the single token `lepo`; every other day still takes two tokens:
//!
//! ```text
//! 5km Pe 10km T lepo lepo 8km Pa 5km IV lepo
//! ```
//!
//! Anything else is rejected with a [`PlanFormatError`].

use chrono::Weekday;
use serde::Serialize;

use crate::calendar::{weekday_from_index, weekday_index};
use crate::constants::plan::{
    RACE_MARKER, REST_KEYWORD, RUN_MARKER, SEPARATOR, TOKEN_COUNT, TOKENS_PER_DAY,
};

/// Monday through Saturday, in plan order.
const PAIRED_DAYS: usize = 6;

/// Why a raw week entry could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanFormatError {
    /// Wrong number of tokens for any accepted layout.
    #[error("expected 13 space-separated tokens (six day pairs and a Sunday token), found {found}")]
    TokenCount {
        /// Number of tokens in the entry.
        found: usize,
    },

    /// Two adjacent separators, or a leading/trailing separator.
    #[error("empty token at position {position}")]
    EmptyToken {
        /// 1-based token position.
        position: usize,
    },
}

/// One week's training, indexed by weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPlan {
    /// Index 0 = Sunday, 1-6 = Monday-Saturday.
    days: [String; 7],
}

impl WeekPlan {
    /// Parse a raw week entry.
    ///
    /// # Errors
    ///
    /// Returns [`PlanFormatError`] if the entry contains an empty token or
    /// the tokens cannot be split into six days plus Sunday.
    pub fn parse(raw: &str) -> Result<Self, PlanFormatError> {
        let tokens: Vec<&str> = raw.split(SEPARATOR).collect();

        if let Some(idx) = tokens.iter().position(|t| t.is_empty()) {
            return Err(PlanFormatError::EmptyToken { position: idx + 1 });
        }

        let Some((sunday, weekdays)) = tokens.split_last() else {
            return Err(PlanFormatError::TokenCount { found: 0 });
        };

        let monday_to_saturday = if tokens.len() == TOKEN_COUNT {
            weekdays
                .chunks_exact(TOKENS_PER_DAY)
                .map(|pair| pair.join(" "))
                .collect::<Vec<_>>()
        } else {
            group_with_rest_shorthand(weekdays).ok_or(PlanFormatError::TokenCount {
                found: tokens.len(),
            })?
        };

        let mut days: [String; 7] = Default::default();
        days[0] = (*sunday).to_string();
        for (slot, plan) in days[1..].iter_mut().zip(monday_to_saturday) {
            *slot = plan;
        }

        Ok(Self { days })
    }

    /// Plan text for a weekday.
    pub fn day(&self, weekday: Weekday) -> &str {
        &self.days[usize::from(weekday_index(weekday))]
    }

    /// Plan text by weekday index (0 = Sunday).
    pub fn by_index(&self, index: u8) -> Option<&str> {
        self.days.get(usize::from(index)).map(String::as_str)
    }

    /// Days in display order, Monday first and Sunday last.
    pub fn days_monday_first(&self) -> impl Iterator<Item = (Weekday, &str)> {
        (1..=6u8)
            .chain(std::iter::once(0))
            .filter_map(|i| weekday_from_index(i).map(|wd| (wd, self.days[usize::from(i)].as_str())))
    }

    /// Reassemble the entry as a space-separated token line.
    pub fn to_raw(&self) -> String {
        self.days_monday_first()
            .map(|(_, plan)| plan)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group Monday-Saturday tokens where a lone rest keyword is a whole day.
fn group_with_rest_shorthand(tokens: &[&str]) -> Option<Vec<String>> {
    let mut days = Vec::with_capacity(PAIRED_DAYS);
    let mut rest = tokens;

    while let Some((&first, tail)) = rest.split_first() {
        if first == REST_KEYWORD {
            days.push(first.to_string());
            rest = tail;
        } else {
            let (&second, tail) = tail.split_first()?;
            days.push(format!("{first} {second}"));
            rest = tail;
        }
    }

    (days.len() == PAIRED_DAYS).then_some(days)
}

/// What kind of session a day holds. A day can be several at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayKind {
    /// Rest day.
    pub rest: bool,
    /// Strength training day.
    pub strength: bool,
    /// Contains a run with a distance.
    pub run: bool,
    /// Contains race-pace running.
    pub race: bool,
}

impl DayKind {
    /// Classify a day's plan text.
    pub fn classify(weekday: Weekday, plan: &str, strength_days: &[Weekday]) -> Self {
        Self {
            rest: plan.contains(REST_KEYWORD),
            strength: strength_days.contains(&weekday),
            run: plan.contains(RUN_MARKER),
            race: plan.contains(RACE_MARKER),
        }
    }
}
