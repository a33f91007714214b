use serde::ser::{Serialize, SerializeMap, Serializer};
use std::borrow::Cow;

use super::config_key::ConfigKey;

/// The resolved mapping of every recognized key to its value.
///
/// Always fully populated: there is no way to build a set with a key missing.
/// Values are opaque strings and are never parsed or normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSet {
    values: [String; ConfigKey::COUNT],
}

impl ConfigurationSet {
    /// Build a set by asking `value_for` once per key, in reporting order.
    pub fn from_fn(mut value_for: impl FnMut(ConfigKey) -> String) -> Self {
        Self {
            values: ConfigKey::ALL.map(&mut value_for),
        }
    }

    /// The set made only of built-in defaults.
    pub fn defaults() -> Self {
        Self::from_fn(|key| key.default_value().to_string())
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        &self.values[key.index()]
    }

    /// Iterate `(key, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &str)> + '_ {
        ConfigKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }

    /// `(NAME, value)` pairs ready for `Command::envs`.
    pub fn to_env_pairs(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(key, value)| (key.as_str(), value.to_string()))
            .collect()
    }

    /// `KEY=value` lines in reporting order.
    ///
    /// Control characters in values are escaped (`\n`, `\t`, `\u{1b}`), so
    /// there is always exactly one line per key. The values themselves are
    /// left as they are.
    pub fn assignment_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| format!("{key}={}", escape_control(value)))
            .collect()
    }

    /// POSIX `export KEY='value'` lines, suitable for `eval`.
    pub fn export_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| format!("export {key}={}", shell_quote(value)))
            .collect()
    }
}

impl Serialize for ConfigurationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ConfigKey::COUNT))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}

fn escape_control(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Single-quote a value for POSIX shells.
fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
