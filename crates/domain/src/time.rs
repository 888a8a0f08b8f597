//! Shared time arithmetic.
//!
//! Offsets come from configuration and from the wire, so they can be
//! arbitrarily large. Every helper here saturates at the representable range
//! instead of panicking.

use chrono::{DateTime, TimeDelta, Utc};

/// Converts a signed number of seconds into a [`TimeDelta`], saturating at
/// [`TimeDelta::MIN`] / [`TimeDelta::MAX`].
#[must_use]
pub fn seconds(secs: i64) -> TimeDelta {
    TimeDelta::try_seconds(secs).unwrap_or(if secs > 0 {
        TimeDelta::MAX
    } else {
        TimeDelta::MIN
    })
}

/// Returns `instant + secs`, clamped to the range `chrono` can represent.
#[must_use]
pub fn offset_by_seconds(instant: DateTime<Utc>, secs: i64) -> DateTime<Utc> {
    instant
        .checked_add_signed(seconds(secs))
        .unwrap_or(if secs > 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        })
}
