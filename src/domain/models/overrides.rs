use std::collections::BTreeMap;

use super::config_key::ConfigKey;
use crate::domain::errors::{InitError, InitResult};

/// Caller-supplied values that take precedence over built-in defaults.
///
/// Layers are applied with [`Overrides::layer`]; a later layer wins per key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    values: BTreeMap<ConfigKey, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one key, replacing any earlier value.
    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) -> &mut Self {
        self.values.insert(key, value.into());
        self
    }

    /// Builder form of [`Overrides::set`].
    #[must_use]
    pub fn with(mut self, key: ConfigKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Apply `other` on top of `self`.
    pub fn layer(&mut self, other: &Self) -> &mut Self {
        for (key, value) in &other.values {
            self.values.insert(*key, value.clone());
        }
        self
    }

    /// Iterate set keys in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &str)> + '_ {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Parse `KEY=VALUE` pairs. The value may be empty or contain `=`.
    pub fn from_pairs<I, S>(pairs: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = Self::new();
        for pair in pairs {
            let (key, value) = parse_pair(pair.as_ref())?;
            overrides.set(key, value);
        }
        Ok(overrides)
    }
}

impl FromIterator<(ConfigKey, String)> for Overrides {
    fn from_iter<T: IntoIterator<Item = (ConfigKey, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parse a single `KEY=VALUE` pair.
pub fn parse_pair(pair: &str) -> InitResult<(ConfigKey, String)> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| InitError::MalformedOverride(pair.to_string()))?;
    if key.trim().is_empty() {
        return Err(InitError::MalformedOverride(pair.to_string()));
    }
    Ok((key.parse()?, value.to_string()))
}
