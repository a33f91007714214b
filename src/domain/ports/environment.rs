//! Environment port
//!
//! Publishing a configuration set goes through this trait so that the
//! process-wide environment table is touched in exactly one adapter.

/// Port for reading and writing environment variables.
pub trait EnvironmentPort {
    /// Get a variable. Returns `None` if it is not set.
    fn get_var(&self, key: &str) -> Option<String>;

    /// Set a variable, replacing any previous value.
    fn set_var(&mut self, key: &str, value: &str);
}
