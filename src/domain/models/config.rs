use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::config_key::ConfigKey;
use super::overrides::Overrides;
use crate::domain::errors::{InitError, InitResult};

/// Main configuration structure for scenario-env
///
/// Loaded from `scenario-env.yaml` and `SCENARIO_ENV_*` variables; every
/// field is optional so an absent file yields the built-in behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Replacements for the built-in defaults
    #[serde(default)]
    pub defaults: KeyValues,

    /// Named alternative value sets, selected with `profile`
    #[serde(default)]
    pub profiles: BTreeMap<String, KeyValues>,

    /// Active profile, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Reject empty values instead of publishing them
    #[serde(default)]
    pub strict: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Values taken verbatim from `SCENARIO_ENV_<KEY>` variables
    #[serde(skip)]
    pub environment: KeyValues,
}

impl AppConfig {
    /// Profile in effect: the explicit selection, else the configured one.
    pub fn active_profile<'a>(&'a self, selected: Option<&'a str>) -> Option<&'a str> {
        selected.or(self.profile.as_deref())
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Collapse the file and environment layers into one override set.
    ///
    /// Precedence (lowest to highest):
    /// 1. `defaults` section
    /// 2. active profile
    /// 3. `SCENARIO_ENV_<KEY>` variables
    pub fn layered_overrides(&self, selected_profile: Option<&str>) -> InitResult<Overrides> {
        let mut overrides = self.defaults.to_overrides();

        if let Some(name) = self.active_profile(selected_profile) {
            let profile = self
                .profiles
                .get(name)
                .ok_or_else(|| InitError::UnknownProfile(name.to_string()))?;
            overrides.layer(&profile.to_overrides());
        }

        overrides.layer(&self.environment.to_overrides());
        Ok(overrides)
    }
}

/// Optional value per recognized key, as written in configuration files.
///
/// Only string scalars are accepted. An unquoted number or boolean is
/// rejected, since its written form is gone once YAML has typed it: write
/// `redis_port: "6380"`, not `redis_port: 6380`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KeyValues {
    /// Mesh asset directory
    #[serde(default, with = "verbatim", skip_serializing_if = "Option::is_none")]
    pub meshes_dir: Option<String>,

    /// Scenario data directory
    #[serde(default, with = "verbatim", skip_serializing_if = "Option::is_none")]
    pub scenario_dir: Option<String>,

    /// Redis host
    #[serde(default, with = "verbatim", skip_serializing_if = "Option::is_none")]
    pub redis_host: Option<String>,

    /// Redis port
    #[serde(default, with = "verbatim", skip_serializing_if = "Option::is_none")]
    pub redis_port: Option<String>,
}

impl KeyValues {
    pub fn get(&self, key: ConfigKey) -> Option<&String> {
        match key {
            ConfigKey::MeshesDir => self.meshes_dir.as_ref(),
            ConfigKey::ScenarioDir => self.scenario_dir.as_ref(),
            ConfigKey::RedisHost => self.redis_host.as_ref(),
            ConfigKey::RedisPort => self.redis_port.as_ref(),
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: impl Into<String>) {
        let slot = match key {
            ConfigKey::MeshesDir => &mut self.meshes_dir,
            ConfigKey::ScenarioDir => &mut self.scenario_dir,
            ConfigKey::RedisHost => &mut self.redis_host,
            ConfigKey::RedisPort => &mut self.redis_port,
        };
        *slot = Some(value.into());
    }

    pub fn to_overrides(&self) -> Overrides {
        ConfigKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key, value.clone())))
            .collect()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for JSON log files; stderr only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "never".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

mod verbatim {
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::fmt;

    struct Text(String);

    struct TextVisitor;

    impl Visitor<'_> for TextVisitor {
        type Value = Text;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a quoted string (unquoted numbers and booleans are not kept as written)")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Text, E> {
            Ok(Text(value.to_owned()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Text, E> {
            Ok(Text(value))
        }
    }

    impl<'de> Deserialize<'de> for Text {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_string(TextVisitor)
        }
    }

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value: Option<Text> = Option::deserialize(deserializer)?;
        Ok(value.map(|Text(text)| text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_no_overrides() {
        let config = AppConfig::default();
        let overrides = config.layered_overrides(None).unwrap();
        assert!(overrides.is_empty());
        assert!(!config.strict);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
defaults:
  redis_host: 10.0.0.5
  redis_port: "06380"
profiles:
  lab:
    meshes_dir: /lab/meshes
    scenario_dir: /lab/scenario
profile: lab
strict: true
logging:
  level: debug
  format: json
"#;

        let config: AppConfig = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.defaults.redis_port.as_deref(), Some("06380"));
        assert_eq!(config.defaults.redis_host.as_deref(), Some("10.0.0.5"));
        assert_eq!(config.profile.as_deref(), Some("lab"));
        assert!(config.strict);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.rotation, "never");
        assert_eq!(config.profile_names().collect::<Vec<_>>(), vec!["lab"]);
    }

    #[test]
    fn test_environment_is_not_read_from_file() {
        let yaml = "environment:\n  redis_port: \"1\"\n";
        let config: AppConfig = serde_yaml::from_str(yaml).expect("YAML should parse");
        assert_eq!(config.environment, KeyValues::default());
    }

    #[test]
    fn test_key_values_set() {
        let mut values = KeyValues::default();
        values.set(ConfigKey::RedisPort, "+7000");
        values.set(ConfigKey::MeshesDir, "/m");

        assert_eq!(values.redis_port.as_deref(), Some("+7000"));
        assert_eq!(values.get(ConfigKey::MeshesDir).map(String::as_str), Some("/m"));
        assert_eq!(values.to_overrides().len(), 2);
    }

    #[test]
    fn test_profile_layers_over_defaults() {
        let mut config = AppConfig::default();
        config.defaults.meshes_dir = Some("/base/meshes".to_string());
        config.defaults.redis_port = Some("7000".to_string());
        config.profiles.insert(
            "alt".to_string(),
            KeyValues {
                meshes_dir: Some("/alt/meshes".to_string()),
                ..Default::default()
            },
        );

        let overrides = config.layered_overrides(Some("alt")).unwrap();
        assert_eq!(overrides.get(ConfigKey::MeshesDir), Some("/alt/meshes"));
        assert_eq!(overrides.get(ConfigKey::RedisPort), Some("7000"));

        let without = config.layered_overrides(None).unwrap();
        assert_eq!(without.get(ConfigKey::MeshesDir), Some("/base/meshes"));
    }

    #[test]
    fn test_selected_profile_beats_configured_profile() {
        let mut config = AppConfig::default();
        config.profile = Some("a".to_string());
        config.profiles.insert(
            "a".to_string(),
            KeyValues {
                redis_host: Some("a.local".to_string()),
                ..Default::default()
            },
        );
        config.profiles.insert(
            "b".to_string(),
            KeyValues {
                redis_host: Some("b.local".to_string()),
                ..Default::default()
            },
        );

        let configured = config.layered_overrides(None).unwrap();
        assert_eq!(configured.get(ConfigKey::RedisHost), Some("a.local"));

        let selected = config.layered_overrides(Some("b")).unwrap();
        assert_eq!(selected.get(ConfigKey::RedisHost), Some("b.local"));
    }

    #[test]
    fn test_environment_layer_wins() {
        let mut config = AppConfig::default();
        config.defaults.redis_port = Some("7000".to_string());
        config.environment.redis_port = Some("7100".to_string());

        let overrides = config.layered_overrides(None).unwrap();
        assert_eq!(overrides.get(ConfigKey::RedisPort), Some("7100"));
    }

    #[test]
    fn test_unknown_profile() {
        let config = AppConfig::default();
        let result = config.layered_overrides(Some("missing"));
        assert!(matches!(result, Err(InitError::UnknownProfile(name)) if name == "missing"));
    }
}
