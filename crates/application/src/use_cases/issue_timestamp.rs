//! Issue timestamp use case.

use stamp_domain::{Timestamp, TimestampBuilder, generate_timestamp_id, validate_timestamp_id};
use tracing::debug;

use crate::error::ApplicationResult;
use crate::ports::Clock;

/// Input for issuing a new timestamp.
#[derive(Debug, Clone, Default)]
pub struct IssueTimestampInput {
    /// Explicit `wsu:Id`; when `None` and id generation is enabled a fresh
    /// one is generated.
    pub id: Option<String>,
}

/// Use case for stamping an outgoing message.
pub struct IssueTimestamp<C: Clock> {
    clock: C,
    builder: TimestampBuilder,
    generate_ids: bool,
}

impl<C: Clock> IssueTimestamp<C> {
    /// Creates a new `IssueTimestamp` use case.
    #[must_use]
    pub const fn new(clock: C, builder: TimestampBuilder) -> Self {
        Self {
            clock,
            builder,
            generate_ids: false,
        }
    }

    /// Generates a `wsu:Id` for every token that has none supplied.
    #[must_use]
    pub const fn with_generated_ids(mut self) -> Self {
        self.generate_ids = true;
        self
    }

    /// Builds a timestamp created at the clock's current reading.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApplicationError::Domain`] if the supplied id is not
    /// a valid `wsu:Id`.
    pub fn execute(&self, input: IssueTimestampInput) -> ApplicationResult<Timestamp> {
        if let Some(id) = &input.id {
            validate_timestamp_id(id)?;
        }

        let now = self.clock.now();
        let mut builder = self.builder.clone();
        let id = input
            .id
            .or_else(|| self.generate_ids.then(generate_timestamp_id));
        if let Some(id) = id {
            builder = builder.with_id(id);
        }

        let timestamp = builder.build(now);
        debug!(
            created = %timestamp.created(),
            expires = ?timestamp.expires(),
            id = ?timestamp.id(),
            "issued timestamp"
        );
        Ok(timestamp)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use crate::error::ApplicationError;
    use stamp_domain::{DomainError, TIMESTAMP_ID_PREFIX};

    struct StoppedClock(DateTime<Utc>);

    impl Clock for StoppedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn t() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_issue_uses_clock_reading() {
        let use_case = IssueTimestamp::new(StoppedClock(t()), TimestampBuilder::new(300));
        let ts = use_case.execute(IssueTimestampInput::default()).unwrap();

        assert_eq!(ts.created(), t());
        assert_eq!(ts.expires(), Some(t() + TimeDelta::seconds(300)));
        assert!(ts.id().is_none());
    }

    #[test]
    fn test_issue_with_explicit_id() {
        let use_case = IssueTimestamp::new(StoppedClock(t()), TimestampBuilder::new(0));
        let ts = use_case
            .execute(IssueTimestampInput {
                id: Some("TS-explicit".to_string()),
            })
            .unwrap();

        assert_eq!(ts.id(), Some("TS-explicit"));
        assert!(ts.expires().is_none());
    }

    #[test]
    fn test_issue_with_generated_id() {
        let use_case = IssueTimestamp::new(StoppedClock(t()), TimestampBuilder::default())
            .with_generated_ids();
        let ts = use_case.execute(IssueTimestampInput::default()).unwrap();

        assert!(ts.id().unwrap().starts_with(TIMESTAMP_ID_PREFIX));
    }

    #[test]
    fn test_issue_rejects_invalid_id() {
        let use_case = IssueTimestamp::new(StoppedClock(t()), TimestampBuilder::default());
        let err = use_case
            .execute(IssueTimestampInput {
                id: Some("a:b".to_string()),
            })
            .expect_err("an id with a colon is not an NCName");

        assert_eq!(
            err,
            ApplicationError::Domain(DomainError::InvalidIdentifier("a:b".to_string()))
        );
        assert_eq!(err.rejection(), None);
    }
}
