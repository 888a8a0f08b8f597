//! Application error types

use stamp_domain::{DomainError, RejectionReason};
use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The timestamp failed verification; the message must not be processed.
    #[error("timestamp rejected: {0}")]
    Rejected(#[from] RejectionReason),
}

impl ApplicationError {
    /// The rejection reason, if this error is a verification failure.
    #[must_use]
    pub const fn rejection(&self) -> Option<RejectionReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            Self::Domain(_) => None,
        }
    }
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
