//! The timestamp token value.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

/// A security timestamp: when a message was created and, optionally, when it
/// stops being acceptable.
///
/// Instances are immutable. Two timestamps are equal when their `created`
/// and `expires` instants are equal; the optional `wsu:Id` is reference
/// metadata and does not take part in equality.
#[derive(Debug, Clone)]
pub struct Timestamp {
    created: DateTime<Utc>,
    expires: Option<DateTime<Utc>>,
    id: Option<String>,
}

impl Timestamp {
    /// Creates a timestamp from its two instants.
    ///
    /// No ordering check is made between `created` and `expires`; an expiry
    /// before creation is a legitimate, already-expired token.
    #[must_use]
    pub const fn new(created: DateTime<Utc>, expires: Option<DateTime<Utc>>) -> Self {
        Self {
            created,
            expires,
            id: None,
        }
    }

    /// Returns a copy of this timestamp carrying the given `wsu:Id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The creation instant.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// The expiry instant, if the token declares one.
    #[must_use]
    pub const fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    /// The `wsu:Id` of the element, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns true if the token declares an expiry instant.
    #[must_use]
    pub const fn has_expiry(&self) -> bool {
        self.expires.is_some()
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.created == other.created && self.expires == other.expires
    }
}

impl Eq for Timestamp {}

impl Hash for Timestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.created.hash(state);
        self.expires.hash(state);
    }
}
