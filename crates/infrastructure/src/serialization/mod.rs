//! Serialization adapter for timestamp tokens.
//!
//! Renders a [`stamp_domain::Timestamp`] as a `wsu:Timestamp`-shaped JSON
//! document and parses it back:
//! - Instants are `xsd:dateTime` strings in UTC with a `Z` suffix
//! - Fractional seconds are written with as many digits as needed, so
//!   `created`/`expires` survive the round trip exactly
//! - An absent `Expires` is omitted, never written as a placeholder value
//! - Output uses 2-space indentation and a trailing newline

mod json;
mod wire;

pub use json::*;
pub use wire::*;
