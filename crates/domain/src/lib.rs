//! Stamp Domain - Security timestamp tokens
//!
//! This crate defines the timestamp token, the policy it is verified
//! against, and the pure functions that build and verify it.
//! All types here are pure Rust with no I/O dependencies; the current
//! instant is always passed in by the caller.

pub mod builder;
pub mod error;
pub mod id;
pub mod outcome;
pub mod policy;
pub mod time;
pub mod timestamp;
pub mod validator;

pub use builder::{Precision, TimestampBuilder, build};
pub use error::{DomainError, DomainResult};
pub use id::{TIMESTAMP_ID_PREFIX, generate_timestamp_id, validate_timestamp_id};
pub use outcome::{RejectionReason, VerificationOutcome};
pub use policy::{DEFAULT_MAX_FUTURE_SKEW_SECONDS, DEFAULT_TTL_SECONDS, ValidationPolicy};
pub use timestamp::Timestamp;
pub use validator::{TimestampValidator, acceptance_boundary, remaining_validity, verify};
