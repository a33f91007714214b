//! Implementation of the `scenario-env profiles` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::context::InvocationContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ConfigKey, KeyValues};

#[derive(Debug, Serialize)]
pub struct ProfileEntry {
    pub name: String,
    pub active: bool,
    pub values: KeyValues,
}

#[derive(Debug, Serialize)]
pub struct ProfilesOutput {
    pub profiles: Vec<ProfileEntry>,
}

impl CommandOutput for ProfilesOutput {
    fn to_human(&self) -> String {
        if self.profiles.is_empty() {
            return "No profiles defined.".to_string();
        }

        let mut lines = Vec::new();
        for profile in &self.profiles {
            let marker = if profile.active { "*" } else { " " };
            lines.push(format!("{marker} {}", profile.name));
            for key in ConfigKey::ALL {
                if let Some(value) = profile.values.get(key) {
                    lines.push(format!("    {key}={value}"));
                }
            }
        }
        lines.join("\n")
    }
}

pub fn build(context: &InvocationContext) -> ProfilesOutput {
    let active = context.active_profile();
    ProfilesOutput {
        profiles: context
            .config
            .profiles
            .iter()
            .map(|(name, values)| ProfileEntry {
                name: name.clone(),
                active: active == Some(name.as_str()),
                values: values.clone(),
            })
            .collect(),
    }
}

pub fn execute(context: &InvocationContext, json_mode: bool) -> Result<()> {
    output(&build(context), json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::GlobalArgs;
    use crate::domain::models::AppConfig;

    #[test]
    fn test_no_profiles() {
        let context = InvocationContext::from_config(AppConfig::default(), &GlobalArgs::default());
        assert_eq!(build(&context).to_human(), "No profiles defined.");
    }

    #[test]
    fn test_marks_active_profile() {
        let mut config = AppConfig::default();
        config.profile = Some("lab".to_string());
        config.profiles.insert(
            "lab".to_string(),
            KeyValues {
                meshes_dir: Some("/lab/meshes".to_string()),
                ..Default::default()
            },
        );
        config.profiles.insert("sim".to_string(), KeyValues::default());

        let context = InvocationContext::from_config(config, &GlobalArgs::default());
        let output = build(&context);

        assert_eq!(
            output.to_human(),
            "* lab\n    MESHES_DIR=/lab/meshes\n  sim"
        );
        assert!(output.profiles[0].active);
        assert!(!output.profiles[1].active);
    }
}
