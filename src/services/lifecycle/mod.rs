// Lifecycle classification service
// Decides whether an event is upcoming, happening, or ended relative to
// the current instant

use chrono::{DateTime, Duration, Utc};

use crate::models::schedule::LifecycleStatus;

const LIVE_WINDOW_MS: i64 = 3_600_000;

/// The ±interval around the target instant during which an event counts
/// as happening now.
///
/// Live events carry no explicit end timestamp, so a symmetric window
/// around the nominal start stands in for one.
pub fn live_window() -> Duration {
    Duration::milliseconds(LIVE_WINDOW_MS)
}

/// Classify an event against the fixed one-hour live window.
///
/// Both window boundaries are inclusive: exactly one hour before or after
/// the target still counts as `Happening`.
pub fn classify(now: DateTime<Utc>, target: DateTime<Utc>) -> LifecycleStatus {
    classify_with_window(now, target, live_window())
}

/// Classify an event against a caller-supplied live window.
pub fn classify_with_window(
    now: DateTime<Utc>,
    target: DateTime<Utc>,
    window: Duration,
) -> LifecycleStatus {
    let distance = target.signed_duration_since(now);
    if distance < -window {
        LifecycleStatus::Ended
    } else if distance <= window {
        LifecycleStatus::Happening
    } else {
        LifecycleStatus::Upcoming
    }
}

/// One-shot gate: is the event live right now?
///
/// Used by surfaces that only need a yes/no answer, such as enabling a
/// registration button.
pub fn is_live(now: DateTime<Utc>, target: DateTime<Utc>) -> bool {
    classify(now, target) == LifecycleStatus::Happening
}
