use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::InitError;

/// Built-in mesh asset directory.
pub const DEFAULT_MESHES_DIR: &str = "/opt/scenario/meshes";

/// Built-in scenario data directory.
pub const DEFAULT_SCENARIO_DIR: &str = "/opt/scenario/scenarios";

/// Built-in Redis host.
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";

/// Built-in Redis port.
pub const DEFAULT_REDIS_PORT: &str = "6379";

/// One of the recognized configuration keys.
///
/// Declaration order is the fixed reporting order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    /// `MESHES_DIR`: directory holding 3D mesh assets
    MeshesDir,
    /// `SCENARIO_DIR`: directory holding scenario/transform data
    ScenarioDir,
    /// `REDIS_HOST`: host of the Redis-compatible service
    RedisHost,
    /// `REDIS_PORT`: port of the Redis-compatible service
    RedisPort,
}

impl ConfigKey {
    /// Number of recognized keys.
    pub const COUNT: usize = 4;

    /// All keys in reporting order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::MeshesDir,
        Self::ScenarioDir,
        Self::RedisHost,
        Self::RedisPort,
    ];

    /// Environment variable name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MeshesDir => "MESHES_DIR",
            Self::ScenarioDir => "SCENARIO_DIR",
            Self::RedisHost => "REDIS_HOST",
            Self::RedisPort => "REDIS_PORT",
        }
    }

    pub const fn default_value(self) -> &'static str {
        match self {
            Self::MeshesDir => DEFAULT_MESHES_DIR,
            Self::ScenarioDir => DEFAULT_SCENARIO_DIR,
            Self::RedisHost => DEFAULT_REDIS_HOST,
            Self::RedisPort => DEFAULT_REDIS_PORT,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = InitError;

    /// Accepts `REDIS_PORT`, `redis_port` and `redis-port`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| InitError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_order() {
        let names: Vec<_> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec!["MESHES_DIR", "SCENARIO_DIR", "REDIS_HOST", "REDIS_PORT"]
        );
        for (i, key) in ConfigKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ConfigKey::RedisHost.default_value(), "127.0.0.1");
        assert_eq!(ConfigKey::RedisPort.default_value(), "6379");
        assert!(!ConfigKey::MeshesDir.default_value().is_empty());
        assert!(!ConfigKey::ScenarioDir.default_value().is_empty());
    }

    #[test]
    fn test_parse_key_spellings() {
        assert_eq!("REDIS_PORT".parse::<ConfigKey>().unwrap(), ConfigKey::RedisPort);
        assert_eq!("redis_port".parse::<ConfigKey>().unwrap(), ConfigKey::RedisPort);
        assert_eq!("meshes-dir".parse::<ConfigKey>().unwrap(), ConfigKey::MeshesDir);
        assert_eq!(" Scenario_Dir ".parse::<ConfigKey>().unwrap(), ConfigKey::ScenarioDir);
    }

    #[test]
    fn test_parse_unknown_key() {
        match "REDIS_URL".parse::<ConfigKey>() {
            Err(InitError::UnknownKey(name)) => assert_eq!(name, "REDIS_URL"),
            other => panic!("Expected UnknownKey, got {other:?}"),
        }
    }
}
