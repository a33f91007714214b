use std::collections::HashMap;

use crate::domain::ports::EnvironmentPort;

/// In-memory environment that never touches the process table.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    vars: HashMap<String, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvironmentPort for MemoryEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_single_entry() {
        let mut env = MemoryEnvironment::new();
        env.set_var("REDIS_PORT", "6379");
        env.set_var("REDIS_PORT", "7000");

        assert_eq!(env.len(), 1);
        assert_eq!(env.get_var("REDIS_PORT").as_deref(), Some("7000"));
        assert_eq!(env.get_var("REDIS_HOST"), None);
    }
}
