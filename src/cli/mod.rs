//! Command-line interface
//!
//! Parses flags with clap, loads the layered configuration, installs the
//! logger and dispatches to a command.

pub mod commands;
pub mod context;
pub mod output;
pub mod types;

use anyhow::Result;
use std::process::ExitCode;

pub use context::InvocationContext;
pub use output::{CommandOutput, OutputFormat};
pub use types::{Cli, Commands, GlobalArgs};

use crate::infrastructure::logging::LoggerImpl;

/// Run a parsed command line to completion.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let context = InvocationContext::load(&cli.global)?;
    let _logger = LoggerImpl::init(&context.log_config()?)?;

    tracing::debug!(
        profile = ?context.active_profile(),
        strict = context.initializer().is_strict(),
        "configuration loaded"
    );

    let json = cli.global.json;
    match cli.command.unwrap_or(Commands::Init) {
        Commands::Init => commands::init::execute(&context, json)?,
        Commands::Show(args) => commands::show::execute(&args, &context, json)?,
        Commands::Exec(args) => return commands::exec::execute(&args, &context, json).await,
        Commands::Profiles => commands::profiles::execute(&context, json)?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Report a failed command on stderr (or stdout as JSON).
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("error: {err:#}");
    }
}
