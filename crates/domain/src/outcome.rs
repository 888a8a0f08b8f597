//! Verification results.

use thiserror::Error;

/// Why a timestamp was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    /// The token's own `Expires` instant has passed.
    #[error("the message has expired")]
    Expired,

    /// `Created` is older than the local freshness window.
    #[error("the message timestamp is too old")]
    Stale,

    /// `Created` lies further in the future than the skew tolerance allows.
    #[error("the message timestamp is in the future")]
    InFuture,
}

/// Result of checking a timestamp against a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    /// Every check passed.
    Accepted,
    /// A check failed. Rejection is terminal for the message.
    Rejected {
        /// The first failing check.
        reason: RejectionReason,
    },
}

impl VerificationOutcome {
    /// Returns true if the token was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<RejectionReason> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reason } => Some(*reason),
        }
    }

    /// Converts the outcome into a `Result` so callers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectionReason`] when the token was rejected.
    pub const fn into_result(self) -> Result<(), RejectionReason> {
        match self {
            Self::Accepted => Ok(()),
            Self::Rejected { reason } => Err(reason),
        }
    }
}

impl From<RejectionReason> for VerificationOutcome {
    fn from(reason: RejectionReason) -> Self {
        Self::Rejected { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepted() {
        let outcome = VerificationOutcome::Accepted;
        assert!(outcome.is_accepted());
        assert_eq!(outcome.reason(), None);
        assert_eq!(outcome.into_result(), Ok(()));
    }

    #[test]
    fn test_rejected() {
        let outcome = VerificationOutcome::from(RejectionReason::Stale);
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.reason(), Some(RejectionReason::Stale));
        assert_eq!(outcome.into_result(), Err(RejectionReason::Stale));
    }

    #[test]
    fn test_reason_messages() {
        assert_eq!(RejectionReason::Expired.to_string(), "the message has expired");
        assert!(RejectionReason::Stale.to_string().contains("too old"));
        assert!(RejectionReason::InFuture.to_string().contains("future"));
    }
}
