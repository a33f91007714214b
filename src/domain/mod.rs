//! Domain layer for scenario-env
//!
//! Configuration keys, the resolved configuration set, override layers and
//! the port through which a set reaches an environment.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{InitError, InitResult};
