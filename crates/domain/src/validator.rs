//! Timestamp verification.
//!
//! Verification is a pure function of the token, the policy and the
//! caller-supplied current instant. Checks run in a fixed order and the first
//! failure is reported:
//!
//! 1. `Expired`: the token declares an expiry and `now` is past it. `now`
//!    equal to the expiry is still valid.
//! 2. `Stale`: `now - created` exceeds the policy TTL. The token carries no
//!    TTL of its own, so the window always comes from the local policy.
//! 3. `InFuture`: `created` is later than `now` plus the skew tolerance.

use chrono::{DateTime, TimeDelta, Utc};

use crate::outcome::{RejectionReason, VerificationOutcome};
use crate::policy::ValidationPolicy;
use crate::time::seconds;
use crate::timestamp::Timestamp;

/// Stateless timestamp validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampValidator;

impl TimestampValidator {
    /// Checks `token` against `policy` at instant `now`.
    #[must_use]
    pub fn verify(
        token: &Timestamp,
        policy: &ValidationPolicy,
        now: DateTime<Utc>,
    ) -> VerificationOutcome {
        verify(token, policy, now)
    }
}

/// Checks `token` against `policy` at instant `now`.
#[must_use]
pub fn verify(
    token: &Timestamp,
    policy: &ValidationPolicy,
    now: DateTime<Utc>,
) -> VerificationOutcome {
    match first_failure(token, policy, now) {
        Some(reason) => VerificationOutcome::Rejected { reason },
        None => VerificationOutcome::Accepted,
    }
}

fn first_failure(
    token: &Timestamp,
    policy: &ValidationPolicy,
    now: DateTime<Utc>,
) -> Option<RejectionReason> {
    if token.expires().is_some_and(|expires| now > expires) {
        return Some(RejectionReason::Expired);
    }

    let age = now.signed_duration_since(token.created());
    if age > seconds(policy.ttl_seconds) {
        return Some(RejectionReason::Stale);
    }

    if token.created() > policy.future_limit(now) {
        return Some(RejectionReason::InFuture);
    }

    None
}

/// The last instant at which `token` can be accepted under `policy`: the
/// earlier of its `Expires` and the policy's freshness deadline.
///
/// This ignores the future-skew check; pair it with [`verify`].
#[must_use]
pub fn acceptance_boundary(token: &Timestamp, policy: &ValidationPolicy) -> DateTime<Utc> {
    let deadline = policy.freshness_deadline(token.created());
    token
        .expires()
        .map_or(deadline, |expires| expires.min(deadline))
}

/// How long `token` remains acceptable under `policy`, measured from `now`.
///
/// Returns `None` when the token is rejected at `now`.
#[must_use]
pub fn remaining_validity(
    token: &Timestamp,
    policy: &ValidationPolicy,
    now: DateTime<Utc>,
) -> Option<TimeDelta> {
    verify(token, policy, now)
        .is_accepted()
        .then(|| acceptance_boundary(token, policy).signed_duration_since(now))
}
