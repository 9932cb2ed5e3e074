// Test fixtures - reusable instants
// Provides consistent timestamps across all test files

use chrono::{DateTime, TimeZone, Utc};

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Returns 2025-01-01T00:00:00Z
    pub fn new_year_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    /// Returns 2025-01-03T12:30:05Z (two and a half days after new year)
    pub fn launch_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 3, 12, 30, 5).unwrap()
    }

    /// Returns 2025-06-21T19:00:00Z (a midsummer evening event)
    pub fn midsummer_gala_2025() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 21, 19, 0, 0).unwrap()
    }
}

/// Raw timestamp strings the data backend persists
pub mod records {
    /// RFC 3339 form of `instants::launch_2025`
    pub const LAUNCH_2025: &str = "2025-01-03T12:30:05Z";

    /// Same instant expressed with a non-UTC offset
    pub const LAUNCH_2025_OFFSET: &str = "2025-01-03T14:30:05+02:00";
}
