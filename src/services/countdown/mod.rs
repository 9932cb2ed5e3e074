// Countdown service
// Splits the remaining time before a target instant into display buckets
// and formats them the way the legacy displays expect

use chrono::{DateTime, Utc};

use crate::models::schedule::CountdownBreakdown;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Decompose the remaining time until `target` into days, hours, minutes
/// and seconds.
///
/// All-zero once the target has passed. Calendar-unaware: a "day" here is
/// always exactly 24 hours regardless of DST or calendar boundaries.
pub fn decompose(now: DateTime<Utc>, target: DateTime<Utc>) -> CountdownBreakdown {
    let distance = target.signed_duration_since(now).num_milliseconds();
    if distance <= 0 {
        return CountdownBreakdown::default();
    }

    CountdownBreakdown {
        days: (distance / MS_PER_DAY) as u64,
        hours: ((distance % MS_PER_DAY) / MS_PER_HOUR) as u64,
        minutes: ((distance % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
        seconds: ((distance % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
    }
}

/// Display unit for one countdown field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownUnit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl CountdownUnit {
    /// Single-character label appended after the padded value.
    pub fn label(self) -> char {
        match self {
            CountdownUnit::Days => 'D',
            CountdownUnit::Hours => 'H',
            CountdownUnit::Minutes => 'M',
            CountdownUnit::Seconds => 'S',
        }
    }

    // Days render unpadded under 10 while the other units always take two
    // digits; existing displays depend on this exact shape.
    fn min_digits(self) -> usize {
        match self {
            CountdownUnit::Days => 1,
            _ => 2,
        }
    }
}

/// Format one countdown field as a zero-padded value plus unit label,
/// e.g. `format_field(5, CountdownUnit::Hours)` yields `"05H"`.
pub fn format_field(value: u64, unit: CountdownUnit) -> String {
    format!(
        "{value:0width$}{label}",
        width = unit.min_digits(),
        label = unit.label()
    )
}

/// Format a full breakdown as the four fields joined by single spaces,
/// e.g. `"2D 12H 30M 05S"`.
pub fn format_breakdown(breakdown: &CountdownBreakdown) -> String {
    format!(
        "{} {} {} {}",
        format_field(breakdown.days, CountdownUnit::Days),
        format_field(breakdown.hours, CountdownUnit::Hours),
        format_field(breakdown.minutes, CountdownUnit::Minutes),
        format_field(breakdown.seconds, CountdownUnit::Seconds),
    )
}
