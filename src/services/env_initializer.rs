//! Environment initializer
//!
//! Resolves the configuration set from built-in defaults and overrides,
//! optionally validates it, and publishes it through an [`EnvironmentPort`].
//! Resolution is pure; publishing is a separate, explicit step.

use tracing::{debug, info, instrument};

use crate::domain::errors::{InitError, InitResult};
use crate::domain::models::{ConfigKey, ConfigurationSet, Overrides};
use crate::domain::ports::EnvironmentPort;

/// Header line of the diagnostic summary.
pub const SUMMARY_HEADER: &str = "Environment variables set:";

/// Resolve every recognized key: the override if present, else the default.
///
/// Values pass through untouched. Same overrides, same set.
pub fn initialize(overrides: &Overrides) -> ConfigurationSet {
    ConfigurationSet::from_fn(|key| {
        overrides
            .get(key)
            .unwrap_or_else(|| key.default_value())
            .to_string()
    })
}

/// Reject the first empty value, in reporting order.
pub fn validate(set: &ConfigurationSet) -> InitResult<()> {
    match set.iter().find(|(_, value)| value.is_empty()) {
        Some((key, _)) => Err(InitError::InvalidConfiguration { key }),
        None => Ok(()),
    }
}

/// Write every key of `set` into `env`.
pub fn publish<E: EnvironmentPort + ?Sized>(set: &ConfigurationSet, env: &mut E) {
    for (key, value) in set.iter() {
        env.set_var(key.as_str(), value);
        debug!(key = %key, value = %value, "published variable");
    }
}

/// Header plus one `KEY=value` line per key, always five lines.
pub fn summary(set: &ConfigurationSet) -> Vec<String> {
    std::iter::once(SUMMARY_HEADER.to_string())
        .chain(set.assignment_lines())
        .collect()
}

/// Resolve, validate and publish in one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInitializer {
    strict: bool,
}

impl EnvInitializer {
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Reject empty values with [`InitError::InvalidConfiguration`].
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Resolve and, in strict mode, validate without publishing.
    #[instrument(skip(self, overrides), fields(overrides = overrides.len(), strict = self.strict))]
    pub fn resolve(&self, overrides: &Overrides) -> InitResult<ConfigurationSet> {
        for (key, value) in overrides.iter() {
            debug!(key = %key, value = %value, "override applied");
        }

        let set = initialize(overrides);
        if self.strict {
            validate(&set)?;
        }
        Ok(set)
    }

    /// Resolve, validate and publish into `env`.
    pub fn run<E: EnvironmentPort + ?Sized>(
        &self,
        overrides: &Overrides,
        env: &mut E,
    ) -> InitResult<ConfigurationSet> {
        let set = self.resolve(overrides)?;
        publish(&set, env);
        info!(
            meshes_dir = set.get(ConfigKey::MeshesDir),
            scenario_dir = set.get(ConfigKey::ScenarioDir),
            redis_host = set.get(ConfigKey::RedisHost),
            redis_port = set.get(ConfigKey::RedisPort),
            "environment initialized"
        );
        Ok(set)
    }
}
