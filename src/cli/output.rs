//! Output formatting utilities for the CLI.

use clap::ValueEnum;
use serde::Serialize;

/// Stdout rendering of a command result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Header plus `KEY=value` lines
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// `export KEY='value'` lines for `eval`
    Shell,
}

impl OutputFormat {
    /// `--json` wins over any other selection.
    pub const fn resolve(self, json_mode: bool) -> Self {
        if json_mode {
            Self::Json
        } else {
            self
        }
    }
}

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Shell rendering; commands without one fall back to human output.
    fn to_shell(&self) -> String {
        self.to_human()
    }
}

pub fn render<T: CommandOutput>(result: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => result.to_human(),
        OutputFormat::Json => serde_json::to_string_pretty(&result.to_json()).unwrap_or_default(),
        OutputFormat::Shell => result.to_shell(),
    }
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    output_as(result, OutputFormat::Human.resolve(json_mode));
}

pub fn output_as<T: CommandOutput>(result: &T, format: OutputFormat) {
    println!("{}", render(result, format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
    }

    impl CommandOutput for Sample {
        fn to_human(&self) -> String {
            format!("name: {}", self.name)
        }
    }

    #[test]
    fn test_render_formats() {
        let sample = Sample { name: "lab" };
        assert_eq!(render(&sample, OutputFormat::Human), "name: lab");
        assert_eq!(render(&sample, OutputFormat::Shell), "name: lab");

        let json: serde_json::Value =
            serde_json::from_str(&render(&sample, OutputFormat::Json)).unwrap();
        assert_eq!(json["name"], "lab");
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(OutputFormat::Shell.resolve(true), OutputFormat::Json);
        assert_eq!(OutputFormat::Shell.resolve(false), OutputFormat::Shell);
    }
}
