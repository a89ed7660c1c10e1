//! Time utilities for mesheryctl
//!
//! Provides the age formatting used when listing cluster resources.

use chrono::{DateTime, Utc};

/// Render the age of a resource created at `created`, as seen at `now`.
///
/// The elapsed time is rounded to the nearest second. Creation times in the
/// future clamp to zero.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use mctl_core::time::format_age;
///
/// let now = Utc::now();
/// assert_eq!(format_age(now - Duration::seconds(3725), now), "1h2m5s");
/// ```
pub fn format_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let millis = now
        .signed_duration_since(created)
        .num_milliseconds()
        .max(0) as u64;
    format_duration_secs((millis + 500) / 1000)
}

/// Format whole seconds as hours, minutes and seconds (`45s`, `2m5s`, `1h0m7s`).
///
/// Leading zero units are omitted; once a larger unit is printed the smaller
/// ones always follow.
pub fn format_duration_secs(secs: u64) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let remaining_secs = secs % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, mins, remaining_secs)
    } else if mins > 0 {
        format!("{}m{}s", mins, remaining_secs)
    } else {
        format!("{}s", remaining_secs)
    }
}
