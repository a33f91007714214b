pub mod config;
pub mod config_key;
pub mod configuration_set;
pub mod overrides;

pub use config::{AppConfig, KeyValues, LoggingConfig};
pub use config_key::ConfigKey;
pub use configuration_set::ConfigurationSet;
pub use overrides::Overrides;
