//! Verify timestamp use case.

use chrono::{DateTime, Utc};
use stamp_domain::{Timestamp, ValidationPolicy, VerificationOutcome, acceptance_boundary, verify};
use tracing::{debug, warn};

use crate::error::ApplicationResult;
use crate::ports::Clock;

/// Output from a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyTimestampOutput {
    /// The instant the check was made at.
    pub verified_at: DateTime<Utc>,
    /// Seconds the token remains acceptable under the policy.
    pub seconds_remaining: i64,
}

/// Use case for checking the timestamp of an incoming message.
///
/// A rejection is returned as an error: the message must not be processed
/// any further.
pub struct VerifyTimestamp<C: Clock> {
    clock: C,
    policy: ValidationPolicy,
}

impl<C: Clock> VerifyTimestamp<C> {
    /// Creates a new `VerifyTimestamp` use case.
    #[must_use]
    pub const fn new(clock: C, policy: ValidationPolicy) -> Self {
        Self { clock, policy }
    }

    /// The policy tokens are checked against.
    #[must_use]
    pub const fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Checks `timestamp` at the clock's current reading.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApplicationError::Rejected`] with the first failing
    /// check if the timestamp is expired, stale or in the future.
    pub fn execute(&self, timestamp: &Timestamp) -> ApplicationResult<VerifyTimestampOutput> {
        let now = self.clock.now();
        let outcome = verify(timestamp, &self.policy, now);

        if let VerificationOutcome::Rejected { reason } = outcome {
            warn!(
                %reason,
                created = %timestamp.created(),
                expires = ?timestamp.expires(),
                now = %now,
                ttl_seconds = self.policy.ttl_seconds,
                "timestamp rejected"
            );
            return Err(reason.into());
        }

        let seconds_remaining = acceptance_boundary(timestamp, &self.policy)
            .signed_duration_since(now)
            .num_seconds();
        debug!(
            created = %timestamp.created(),
            seconds_remaining,
            "timestamp accepted"
        );

        Ok(VerifyTimestampOutput {
            verified_at: now,
            seconds_remaining,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use chrono::{TimeDelta, TimeZone};
    use pretty_assertions::assert_eq;
    use stamp_domain::{RejectionReason, build};

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
    fn test_accepts_fresh_timestamp() {
        let use_case = VerifyTimestamp::new(StoppedClock(t()), ValidationPolicy::new(300));
        let output = use_case.execute(&build(300, t())).expect("should accept");

        assert_eq!(
            output,
            VerifyTimestampOutput {
                verified_at: t(),
                seconds_remaining: 300,
            }
        );
    }

    #[test]
    fn test_rejects_expired_timestamp() {
        let use_case = VerifyTimestamp::new(StoppedClock(t()), ValidationPolicy::new(300));
        let err = use_case.execute(&build(-1, t())).unwrap_err();

        assert_eq!(err, ApplicationError::Rejected(RejectionReason::Expired));
        assert_eq!(err.rejection(), Some(RejectionReason::Expired));
    }

    #[test]
    fn test_rejects_stale_timestamp() {
        let use_case = VerifyTimestamp::new(StoppedClock(t()), ValidationPolicy::new(-1));
        let err = use_case.execute(&build(300, t())).unwrap_err();

        assert_eq!(err.rejection(), Some(RejectionReason::Stale));
    }

    #[test]
    fn test_clock_reading_is_used() {
        let later = t() + TimeDelta::seconds(301);
        let use_case = VerifyTimestamp::new(StoppedClock(later), ValidationPolicy::new(600));
        let err = use_case.execute(&build(300, t())).unwrap_err();

        assert_eq!(err.rejection(), Some(RejectionReason::Expired));
    }

    #[test]
    fn test_borrowed_clock() {
        let clock = StoppedClock(t());
        let use_case = VerifyTimestamp::new(&clock, ValidationPolicy::default());
        assert!(use_case.execute(&build(0, t())).is_ok());
        assert_eq!(use_case.policy(), &ValidationPolicy::default());
    }
}
