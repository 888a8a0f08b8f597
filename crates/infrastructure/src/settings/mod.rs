//! Policy configuration loading.

mod policy;

pub use policy::{ConfigError, ENV_PREFIX, load_policy, load_policy_from};
