//! scenario-env - environment initializer for scenario tooling
//!
//! Resolves `MESHES_DIR`, `SCENARIO_DIR`, `REDIS_HOST` and `REDIS_PORT` from
//! built-in defaults, a layered YAML configuration, `SCENARIO_ENV_*`
//! variables and command-line overrides, then publishes them to the process
//! environment or a child process and prints a summary.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): keys, configuration sets, overrides, ports
//! - **Service Layer** (`services`): resolution, publication, child launch
//! - **Infrastructure Layer** (`infrastructure`): figment config, tracing, environment adapters
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use scenario_env::{initialize, ConfigKey, Overrides};
//!
//! let set = initialize(&Overrides::new().with(ConfigKey::RedisPort, "7000"));
//! assert_eq!(set.get(ConfigKey::RedisPort), "7000");
//! assert_eq!(set.get(ConfigKey::RedisHost), "127.0.0.1");
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{AppConfig, ConfigKey, ConfigurationSet, KeyValues, Overrides};
pub use domain::ports::EnvironmentPort;
pub use domain::{InitError, InitResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::environment::{MemoryEnvironment, ProcessEnvironment};
pub use services::{initialize, publish, summary, validate, EnvInitializer};
