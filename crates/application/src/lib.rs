//! Stamp Application - Ports and use cases
//!
//! Orchestrates the domain functions behind ports so the wall clock and
//! other outside concerns can be swapped by the infrastructure layer.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
