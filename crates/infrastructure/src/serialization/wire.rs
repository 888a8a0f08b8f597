//! Wire representation of a `wsu:Timestamp`.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use stamp_domain::{DomainError, DomainResult, Timestamp, validate_timestamp_id};

use super::json::{SerializationError, from_json, from_json_bytes, to_json_stable};

/// Years an `xsd:dateTime` can carry in its four-digit form.
const XSD_YEAR_RANGE: RangeInclusive<i32> = 0..=9999;

/// Serialized form of a timestamp header element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireTimestamp {
    /// `wsu:Id` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `wsu:Created`. Optional here so a missing element is reported as a
    /// domain error rather than a generic JSON one.
    #[serde(default)]
    pub created: Option<String>,
    /// `wsu:Expires`; omitted when the token has no expiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl TryFrom<&Timestamp> for WireTimestamp {
    type Error = DomainError;

    fn try_from(timestamp: &Timestamp) -> DomainResult<Self> {
        Ok(Self {
            id: timestamp.id().map(str::to_string),
            created: Some(format_xsd_datetime(timestamp.created())?),
            expires: timestamp.expires().map(format_xsd_datetime).transpose()?,
        })
    }
}

impl TryFrom<WireTimestamp> for Timestamp {
    type Error = DomainError;

    fn try_from(wire: WireTimestamp) -> DomainResult<Self> {
        let created = wire
            .created
            .as_deref()
            .ok_or(DomainError::MissingCreated)
            .and_then(parse_xsd_datetime)?;
        let expires = wire.expires.as_deref().map(parse_xsd_datetime).transpose()?;

        let timestamp = Self::new(created, expires);
        match wire.id {
            Some(id) => {
                validate_timestamp_id(&id)?;
                Ok(timestamp.with_id(id))
            }
            None => Ok(timestamp),
        }
    }
}

/// Formats an instant as an `xsd:dateTime` in UTC.
///
/// Fractional seconds are emitted in groups of three digits, only as many as
/// the instant needs.
///
/// # Errors
///
/// Returns [`DomainError::InstantOutOfRange`] for years outside 0000-9999,
/// which [`parse_xsd_datetime`] could not read back.
pub fn format_xsd_datetime(instant: DateTime<Utc>) -> DomainResult<String> {
    if !XSD_YEAR_RANGE.contains(&instant.year()) {
        return Err(DomainError::InstantOutOfRange(instant.to_string()));
    }
    Ok(instant.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Parses an `xsd:dateTime` with an explicit offset and normalizes it to UTC.
///
/// # Errors
///
/// Returns [`DomainError::InvalidInstant`] if the value is not a valid
/// date-time or has no offset.
pub fn parse_xsd_datetime(value: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| DomainError::InvalidInstant(format!("{value}: {e}")))
}

/// Encodes a timestamp as a deterministic JSON document.
///
/// # Errors
///
/// Returns an error if an instant lies outside the `xsd:dateTime` year range
/// or serialization fails.
pub fn encode_timestamp(timestamp: &Timestamp) -> Result<String, SerializationError> {
    to_json_stable(&WireTimestamp::try_from(timestamp)?)
}

/// Decodes a timestamp from a JSON document.
///
/// # Errors
///
/// Returns an error if the JSON is malformed, `Created` is missing, or an
/// instant or id is invalid.
pub fn decode_timestamp(json: &str) -> Result<Timestamp, SerializationError> {
    let wire: WireTimestamp = from_json(json)?;
    Ok(Timestamp::try_from(wire)?)
}

/// Decodes a timestamp from JSON bytes.
///
/// # Errors
///
/// Same as [`decode_timestamp`].
pub fn decode_timestamp_bytes(bytes: &[u8]) -> Result<Timestamp, SerializationError> {
    let wire: WireTimestamp = from_json_bytes(bytes)?;
    Ok(Timestamp::try_from(wire)?)
}
