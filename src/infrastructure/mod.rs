//! Infrastructure layer module
//!
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//! - Environment adapters
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod environment;
pub mod logging;
