//! Implementation of the `scenario-env show` command.

use anyhow::Result;
use clap::Args;

use super::init::SummaryOutput;
use crate::cli::context::InvocationContext;
use crate::cli::output::{output_as, OutputFormat};

#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Output format; `shell` prints `export` lines for `eval`
    #[arg(short, long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

pub fn execute(args: &ShowArgs, context: &InvocationContext, json_mode: bool) -> Result<()> {
    let set = context.resolve()?;
    output_as(
        &SummaryOutput {
            published: false,
            variables: set,
        },
        args.format.resolve(json_mode),
    );
    Ok(())
}
