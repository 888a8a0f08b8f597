//! Verification policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::offset_by_seconds;

/// Default time-to-live, in seconds, for issued tokens and for the freshness
/// window of the validator.
pub const DEFAULT_TTL_SECONDS: i64 = 300;

/// Default tolerance, in seconds, for a `created` instant ahead of the local
/// clock. Zero means strict.
pub const DEFAULT_MAX_FUTURE_SKEW_SECONDS: u32 = 0;

/// Locally configured rules a timestamp is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Maximum permissible age of `created`, in seconds. Negative values make
    /// every token stale.
    pub ttl_seconds: i64,
    /// How far `created` may lie in the future before the token is rejected.
    pub max_future_skew_seconds: u32,
}

impl ValidationPolicy {
    /// Creates a policy with the given freshness window and no future skew
    /// tolerance.
    #[must_use]
    pub const fn new(ttl_seconds: i64) -> Self {
        Self {
            ttl_seconds,
            max_future_skew_seconds: DEFAULT_MAX_FUTURE_SKEW_SECONDS,
        }
    }

    /// Sets the future skew tolerance.
    #[must_use]
    pub const fn with_max_future_skew(mut self, seconds: u32) -> Self {
        self.max_future_skew_seconds = seconds;
        self
    }

    /// The instant after which a token created at `created` is stale.
    ///
    /// This is the expiry boundary reconstructed from the policy for tokens
    /// that carry no `Expires`.
    #[must_use]
    pub fn freshness_deadline(&self, created: DateTime<Utc>) -> DateTime<Utc> {
        offset_by_seconds(created, self.ttl_seconds)
    }

    /// The latest acceptable `created` instant for a check made at `now`.
    #[must_use]
    pub fn future_limit(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        offset_by_seconds(now, i64::from(self.max_future_skew_seconds))
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECONDS)
    }
}
