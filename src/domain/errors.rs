//! Domain errors for environment initialization.

use thiserror::Error;

use super::models::ConfigKey;

/// Errors raised while resolving or launching with a configuration set.
///
/// The default resolution path never produces one of these; each variant
/// belongs to an opt-in surface (strict mode, `--set`, profiles, `exec`).
#[derive(Debug, Error)]
pub enum InitError {
    /// A value resolved to the empty string while strict mode was on.
    #[error("Invalid configuration: {key} resolved to an empty value")]
    InvalidConfiguration {
        /// The offending key
        key: ConfigKey,
    },

    #[error("Unknown configuration key: {0}. Expected one of: MESHES_DIR, SCENARIO_DIR, REDIS_HOST, REDIS_PORT")]
    UnknownKey(String),

    #[error("Malformed override '{0}'. Expected KEY=VALUE")]
    MalformedOverride(String),

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        /// Program that could not be started
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for initialization operations.
pub type InitResult<T> = Result<T, InitError>;
