//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while constructing a timestamp from external data.
///
/// These never come out of verification: a token that reaches the validator
/// is already well formed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An instant could not be parsed as an `xsd:dateTime` value.
    #[error("invalid instant: {0}")]
    InvalidInstant(String),

    /// An instant cannot be written as a four-digit-year `xsd:dateTime`.
    #[error("instant outside the xsd:dateTime range: {0}")]
    InstantOutOfRange(String),

    /// The mandatory `Created` element is missing.
    #[error("timestamp is missing its Created instant")]
    MissingCreated,

    /// An identifier is invalid or empty.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
