//! Port trait definitions
//!
//! Infrastructure adapters implement these so the services stay independent
//! of the process environment.

pub mod environment;

pub use environment::EnvironmentPort;
