// Property-based tests for the lifecycle classifier and countdown
// decomposer, exercised across the full signed-distance axis

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use event_countdown::models::schedule::LifecycleStatus;
use event_countdown::services::countdown::{decompose, format_field, CountdownUnit};
use event_countdown::services::lifecycle::{classify, is_live, live_window};

const HOUR_MS: i64 = 3_600_000;

fn base_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

proptest! {
    /// Property: the three status conditions partition the distance axis
    /// with no gap and no overlap.
    #[test]
    fn prop_classify_is_exhaustive_and_exclusive(offset_ms in -400_000_000_000i64..400_000_000_000i64) {
        let now = base_now();
        let target = now + Duration::milliseconds(offset_ms);

        let expected = if offset_ms < -HOUR_MS {
            LifecycleStatus::Ended
        } else if offset_ms <= HOUR_MS {
            LifecycleStatus::Happening
        } else {
            LifecycleStatus::Upcoming
        };

        prop_assert_eq!(classify(now, target), expected);
    }

    /// Property: is_live answers true exactly when classify says Happening.
    #[test]
    fn prop_is_live_matches_happening(offset_ms in -400_000_000_000i64..400_000_000_000i64) {
        let now = base_now();
        let target = now + Duration::milliseconds(offset_ms);

        prop_assert_eq!(
            is_live(now, target),
            classify(now, target) == LifecycleStatus::Happening
        );
    }

    /// Property: for future targets, reconstructing milliseconds from the
    /// breakdown lands within one second of the true distance (sub-second
    /// truncation only, never overshoot).
    #[test]
    fn prop_decompose_reconstructs_within_one_second(distance_ms in 1i64..400_000_000_000i64) {
        let now = base_now();
        let target = now + Duration::milliseconds(distance_ms);
        let breakdown = decompose(now, target);

        let reconstructed = (breakdown.total_seconds() * 1_000) as i64;
        prop_assert!(reconstructed <= distance_ms);
        prop_assert!(distance_ms - reconstructed < 1_000);
    }

    /// Property: hours, minutes and seconds always stay inside their
    /// carrying ranges; only days is unbounded.
    #[test]
    fn prop_decompose_fields_stay_in_range(distance_ms in 1i64..400_000_000_000i64) {
        let now = base_now();
        let breakdown = decompose(now, now + Duration::milliseconds(distance_ms));

        prop_assert!(breakdown.hours < 24);
        prop_assert!(breakdown.minutes < 60);
        prop_assert!(breakdown.seconds < 60);
    }

    /// Property: past or present targets always decompose to all-zero.
    #[test]
    fn prop_decompose_zeroes_non_positive_distances(distance_ms in -400_000_000_000i64..=0i64) {
        let now = base_now();
        let breakdown = decompose(now, now + Duration::milliseconds(distance_ms));
        prop_assert!(breakdown.is_zero());
    }

    /// Property: formatted fields keep the padding contract — at least two
    /// digits for hours/minutes/seconds, at least one for days, label last.
    #[test]
    fn prop_format_field_padding(value in 0u64..10_000u64) {
        for unit in [
            CountdownUnit::Days,
            CountdownUnit::Hours,
            CountdownUnit::Minutes,
            CountdownUnit::Seconds,
        ] {
            let formatted = format_field(value, unit);
            let digits = &formatted[..formatted.len() - 1];

            prop_assert!(formatted.ends_with(unit.label()));
            prop_assert_eq!(digits.parse::<u64>().unwrap(), value);

            let min_digits = if unit == CountdownUnit::Days { 1 } else { 2 };
            prop_assert!(digits.len() >= min_digits);
            prop_assert!(digits.len() >= value.to_string().len());
        }
    }
}

mod boundary_tests {
    use super::*;

    #[test]
    fn test_live_window_is_one_hour() {
        assert_eq!(live_window(), Duration::hours(1));
    }

    #[test]
    fn test_classification_flips_exactly_one_ms_past_the_window() {
        let now = base_now();
        let window = live_window();

        assert_eq!(classify(now, now + window), LifecycleStatus::Happening);
        assert_eq!(classify(now, now - window), LifecycleStatus::Happening);
        assert_eq!(
            classify(now, now + window + Duration::milliseconds(1)),
            LifecycleStatus::Upcoming
        );
        assert_eq!(
            classify(now, now - window - Duration::milliseconds(1)),
            LifecycleStatus::Ended
        );
    }
}
