pub mod env_initializer;
pub mod launcher;

pub use env_initializer::{initialize, publish, summary, validate, EnvInitializer, SUMMARY_HEADER};
pub use launcher::{exit_code, launch};
