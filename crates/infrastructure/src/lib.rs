//! Stamp Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, the serialization adapter for
//! timestamp tokens, and configuration and logging bootstrap.

pub mod adapters;
pub mod serialization;
pub mod settings;
pub mod telemetry;

pub use adapters::{FixedClock, SystemClock};
pub use serialization::{
    SerializationError, WireTimestamp, decode_timestamp, decode_timestamp_bytes,
    encode_timestamp, format_xsd_datetime, from_json, from_json_bytes, parse_xsd_datetime,
    to_json_stable,
};
pub use settings::{ConfigError, load_policy, load_policy_from};
pub use telemetry::init_tracing;
