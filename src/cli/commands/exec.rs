//! Implementation of the `scenario-env exec` command.

use anyhow::Result;
use clap::Args;
use std::process::ExitCode;

use super::init::SummaryOutput;
use crate::cli::context::InvocationContext;
use crate::cli::output::output;
use crate::services::{exit_code, launch};

#[derive(Args, Debug, Clone)]
pub struct ExecArgs {
    /// Do not print the summary before launching
    #[arg(short, long)]
    pub quiet: bool,

    /// Program and arguments to run
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

/// Runs the program and returns its exit code.
pub async fn execute(args: &ExecArgs, context: &InvocationContext, json_mode: bool) -> Result<ExitCode> {
    let set = context.resolve()?;

    if !args.quiet {
        output(
            &SummaryOutput {
                published: false,
                variables: set.clone(),
            },
            json_mode,
        );
    }

    let (program, program_args) = args
        .command
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("No command given"))?;

    let status = launch(&set, program, program_args).await?;
    Ok(ExitCode::from(exit_code(status)))
}
