use crate::domain::ports::EnvironmentPort;

/// Process environment adapter.
///
/// Writes are visible to the rest of this process and inherited by any
/// child spawned afterwards. Only call from the single startup thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub const fn new() -> Self {
        Self
    }
}

impl EnvironmentPort for ProcessEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        temp_env::with_var_unset("SCENARIO_ENV_TEST_PROCESS_VAR", || {
            let mut env = ProcessEnvironment::new();
            assert_eq!(env.get_var("SCENARIO_ENV_TEST_PROCESS_VAR"), None);

            env.set_var("SCENARIO_ENV_TEST_PROCESS_VAR", "/tmp/meshes");

            assert_eq!(
                std::env::var("SCENARIO_ENV_TEST_PROCESS_VAR").unwrap(),
                "/tmp/meshes"
            );
            assert_eq!(
                env.get_var("SCENARIO_ENV_TEST_PROCESS_VAR").as_deref(),
                Some("/tmp/meshes")
            );
        });
    }
}
