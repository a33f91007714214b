//! Per-invocation state shared by every command.

use anyhow::{Context, Result};

use crate::cli::types::GlobalArgs;
use crate::domain::errors::InitResult;
use crate::domain::models::{AppConfig, ConfigurationSet, Overrides};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{verbosity_level, LogConfig};
use crate::services::EnvInitializer;

/// Loaded configuration plus the command-line layer on top of it.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub config: AppConfig,
    cli_overrides: Overrides,
    profile: Option<String>,
    strict: bool,
    verbose: u8,
}

impl InvocationContext {
    /// Load the configuration file and environment layers for `args`.
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let config = ConfigLoader::load(args.config.as_deref())
            .context("Failed to load configuration")?;
        Ok(Self::from_config(config, args))
    }

    pub fn from_config(config: AppConfig, args: &GlobalArgs) -> Self {
        Self {
            strict: args.strict || config.strict,
            config,
            cli_overrides: args.overrides(),
            profile: args.profile.clone(),
            verbose: args.verbose,
        }
    }

    /// Profile in effect for this invocation.
    pub fn active_profile(&self) -> Option<&str> {
        self.config.active_profile(self.profile.as_deref())
    }

    /// File, profile, environment and command-line layers, in that order.
    pub fn overrides(&self) -> InitResult<Overrides> {
        let mut overrides = self.config.layered_overrides(self.profile.as_deref())?;
        overrides.layer(&self.cli_overrides);
        Ok(overrides)
    }

    pub const fn initializer(&self) -> EnvInitializer {
        EnvInitializer::new().strict(self.strict)
    }

    /// Resolve without publishing.
    pub fn resolve(&self) -> InitResult<ConfigurationSet> {
        self.initializer().resolve(&self.overrides()?)
    }

    /// Logger settings from the file, raised by `-v` flags.
    pub fn log_config(&self) -> Result<LogConfig> {
        let log_config = LogConfig::try_from(&self.config.logging)
            .context("Invalid logging configuration")?;
        Ok(match verbosity_level(self.verbose) {
            Some(level) => log_config.with_level(level),
            None => log_config,
        })
    }
}
