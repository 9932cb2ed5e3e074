// Event schedule model
// Temporal identity of an event plus the values derived from it

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a persisted timestamp string cannot be parsed.
///
/// Parsing is the one fallible step; past this boundary nothing in the
/// engine can fail.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid target instant '{value}': {source}")]
    InvalidInstant {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Temporal identity of one event: the absolute instant it is anchored to.
///
/// The target is immutable once constructed. Status and countdown values
/// are recomputed from it on every evaluation, never stored on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSchedule {
    target: DateTime<Utc>,
}

impl EventSchedule {
    /// Create a schedule from an already-parsed instant.
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// Parse a persisted ISO 8601 / RFC 3339 timestamp into a schedule.
    ///
    /// # Examples
    /// ```
    /// use event_countdown::models::schedule::EventSchedule;
    ///
    /// let schedule = EventSchedule::from_rfc3339("2025-06-01T18:00:00Z").unwrap();
    /// assert!(EventSchedule::from_rfc3339("next tuesday").is_err());
    /// ```
    pub fn from_rfc3339(value: &str) -> Result<Self, ScheduleError> {
        DateTime::parse_from_rfc3339(value)
            .map(|parsed| Self::new(parsed.with_timezone(&Utc)))
            .map_err(|source| ScheduleError::InvalidInstant {
                value: value.to_string(),
                source,
            })
    }

    /// The instant this event is anchored to.
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }
}

/// Lifecycle classification derived from (now, target).
///
/// Never persisted; recomputed on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleStatus {
    /// Target is more than the live window in the future
    Upcoming,
    /// Now is within the live window around the target
    Happening,
    /// Target is more than the live window in the past
    Ended,
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LifecycleStatus::Upcoming => "Upcoming",
            LifecycleStatus::Happening => "Happening",
            LifecycleStatus::Ended => "Ended",
        };
        f.pad(label)
    }
}

/// Remaining time until a target instant, split into display buckets.
///
/// "Days" is always exactly 24 hours. This is a countdown display value,
/// not a calendar computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CountdownBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownBreakdown {
    /// True when no time remains (the target has passed or is now).
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Total whole seconds represented by this breakdown.
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}
