//! Timestamp construction.
//!
//! The builder is a pure constructor: it takes the current instant from the
//! caller and never validates the requested time-to-live. A negative TTL
//! yields a token whose expiry precedes its creation, which is how an
//! already-expired token is produced.

use chrono::{DateTime, SubsecRound, Utc};

use crate::policy::DEFAULT_TTL_SECONDS;
use crate::time::offset_by_seconds;
use crate::timestamp::Timestamp;

/// Sub-second precision kept in the `Created` instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Keep the instant exactly as supplied.
    #[default]
    Exact,
    /// Truncate to whole milliseconds, the resolution of the classic
    /// `xsd:dateTime` rendering.
    Milliseconds,
}

/// Builds timestamp tokens with a fixed time-to-live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampBuilder {
    ttl_seconds: i64,
    precision: Precision,
    id: Option<String>,
}

impl TimestampBuilder {
    /// Creates a builder issuing tokens that expire `ttl_seconds` after
    /// creation. Zero means no `Expires` element.
    #[must_use]
    pub const fn new(ttl_seconds: i64) -> Self {
        Self {
            ttl_seconds,
            precision: Precision::Exact,
            id: None,
        }
    }

    /// Sets the precision of the `Created` instant.
    #[must_use]
    pub const fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Attaches a `wsu:Id` to every token this builder produces.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The configured time-to-live in seconds.
    #[must_use]
    pub const fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Builds a token created at `now`.
    #[must_use]
    pub fn build(&self, now: DateTime<Utc>) -> Timestamp {
        let created = match self.precision {
            Precision::Exact => now,
            Precision::Milliseconds => now.trunc_subsecs(3),
        };
        let expires =
            (self.ttl_seconds != 0).then(|| offset_by_seconds(created, self.ttl_seconds));

        let timestamp = Timestamp::new(created, expires);
        match &self.id {
            Some(id) => timestamp.with_id(id.clone()),
            None => timestamp,
        }
    }
}

impl Default for TimestampBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TTL_SECONDS)
    }
}

/// Builds a token created at `now` that expires `ttl_seconds` later.
#[must_use]
pub fn build(ttl_seconds: i64, now: DateTime<Utc>) -> Timestamp {
    TimestampBuilder::new(ttl_seconds).build(now)
}
