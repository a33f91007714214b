//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (`scenario-env.yaml` or `--config`)
//! - `SCENARIO_ENV_*` environment variable overrides
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, CONFIG_FILE, ENV_PREFIX};
