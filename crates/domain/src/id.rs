//! Timestamp identifier generation.

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Prefix used for generated `wsu:Id` values.
pub const TIMESTAMP_ID_PREFIX: &str = "TS-";

/// Generates a fresh `wsu:Id` for a timestamp element.
///
/// UUID v7 keeps ids roughly ordered by issue time.
#[must_use]
pub fn generate_timestamp_id() -> String {
    format!("{TIMESTAMP_ID_PREFIX}{}", Uuid::now_v7())
}

/// Checks that an externally supplied id is an XML `NCName`, as an `ID`
/// attribute value must be.
///
/// The name must start with a letter or `_` and continue with letters,
/// digits, `-`, `.` or `_`. Letter and digit classes follow Unicode
/// alphabetic/alphanumeric; colons are never allowed.
///
/// # Errors
///
/// Returns [`DomainError::InvalidIdentifier`] if the id is not an `NCName`.
pub fn validate_timestamp_id(id: &str) -> DomainResult<()> {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return Err(DomainError::InvalidIdentifier("empty id".to_string()));
    };
    let valid_start = first.is_alphabetic() || first == '_';
    let valid_rest = chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_'));
    if !(valid_start && valid_rest) {
        return Err(DomainError::InvalidIdentifier(id.to_string()));
    }
    Ok(())
}
