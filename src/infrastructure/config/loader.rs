use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::domain::models::{AppConfig, ConfigKey};
use crate::domain::ports::EnvironmentPort;
use crate::infrastructure::environment::ProcessEnvironment;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "scenario-env.yaml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "SCENARIO_ENV_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `explicit` file, or `./scenario-env.yaml` if present
    /// 3. Environment variables (`SCENARIO_ENV_*` prefix)
    ///
    /// An explicit path must exist; the discovered file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
        Self::load_with_env(explicit, &ProcessEnvironment::new())
    }

    /// [`ConfigLoader::load`], reading `SCENARIO_ENV_<KEY>` and
    /// `SCENARIO_ENV_PROFILE` from `env` instead of the process table.
    pub fn load_with_env<E: EnvironmentPort + ?Sized>(
        explicit: Option<&Path>,
        env: &E,
    ) -> Result<AppConfig, ConfigError> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Some(PathBuf::from(CONFIG_FILE)).filter(|path| path.is_file()),
        };

        debug!(path = ?path, "loading configuration");
        let mut config = Self::extract(&Self::figment(path.as_deref()))?;
        Self::apply_environment(&mut config, env);
        Ok(config)
    }

    /// Name of the variable overriding `key`, e.g. `SCENARIO_ENV_REDIS_PORT`.
    pub fn env_var(key: ConfigKey) -> String {
        format!("{ENV_PREFIX}{}", key.as_str())
    }

    /// Copy the `SCENARIO_ENV_*` key and profile variables into `config`.
    ///
    /// Values are taken as raw strings; figment would type them and lose
    /// leading zeros, signs and number formats.
    pub fn apply_environment<E: EnvironmentPort + ?Sized>(config: &mut AppConfig, env: &E) {
        for key in ConfigKey::ALL {
            if let Some(value) = env.get_var(&Self::env_var(key)) {
                config.environment.set(key, value);
            }
        }

        if let Some(profile) = env
            .get_var(&format!("{ENV_PREFIX}PROFILE"))
            .filter(|profile| !profile.is_empty())
        {
            config.profile = Some(profile);
        }
    }

    /// Load configuration from a specific file, without environment layers
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(path.as_ref()));
        Self::extract(&figment)
    }

    /// Build the layered figment used by [`ConfigLoader::load`].
    ///
    /// Only `SCENARIO_ENV_STRICT` goes through figment; the string-valued
    /// variables are applied by [`ConfigLoader::apply_environment`].
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).only(&["strict"]))
    }

    fn extract(figment: &Figment) -> Result<AppConfig, ConfigError> {
        let config: AppConfig = figment.extract().map_err(Box::new)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}
