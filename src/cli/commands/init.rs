//! Implementation of the `scenario-env init` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::context::InvocationContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::ConfigurationSet;
use crate::infrastructure::environment::ProcessEnvironment;
use crate::services::summary;

/// A resolved set, as reported by `init`, `show` and `exec`.
#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    pub published: bool,
    pub variables: ConfigurationSet,
}

impl CommandOutput for SummaryOutput {
    fn to_human(&self) -> String {
        summary(&self.variables).join("\n")
    }

    fn to_shell(&self) -> String {
        self.variables.export_lines().join("\n")
    }
}

pub fn execute(context: &InvocationContext, json_mode: bool) -> Result<()> {
    let mut env = ProcessEnvironment::new();
    let set = context.initializer().run(&context.overrides()?, &mut env)?;

    output(
        &SummaryOutput {
            published: true,
            variables: set,
        },
        json_mode,
    );
    Ok(())
}
