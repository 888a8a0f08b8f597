//! Layered configuration for the verification policy.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults (`ttl_seconds = 300`, `max_future_skew_seconds = 0`)
//! 2. An optional file; the format follows its extension (TOML, YAML, JSON)
//! 3. Environment variables prefixed with `STAMP_`, e.g. `STAMP_TTL_SECONDS`

use std::path::Path;

use config::{Config, Environment, File};
use stamp_domain::ValidationPolicy;

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "STAMP";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Loads the policy from defaults and `STAMP_*` environment variables.
///
/// # Errors
///
/// Returns an error if an environment value cannot be converted.
pub fn load_policy() -> Result<ValidationPolicy, ConfigError> {
    build_policy(None, Environment::with_prefix(ENV_PREFIX))
}

/// Loads the policy from defaults, the file at `path` if it exists, and
/// `STAMP_*` environment variables.
///
/// # Errors
///
/// Returns an error if the file is malformed or a value cannot be converted.
pub fn load_policy_from(path: &Path) -> Result<ValidationPolicy, ConfigError> {
    build_policy(Some(path), Environment::with_prefix(ENV_PREFIX))
}

fn build_policy(
    path: Option<&Path>,
    environment: Environment,
) -> Result<ValidationPolicy, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(false));
    }

    // Keys absent from every source fall back to `ValidationPolicy::default()`.
    let policy: ValidationPolicy = builder
        .add_source(environment.try_parsing(true))
        .build()?
        .try_deserialize()?;

    tracing::debug!(
        ttl_seconds = policy.ttl_seconds,
        max_future_skew_seconds = policy.max_future_skew_seconds,
        "loaded timestamp policy"
    );
    Ok(policy)
}
