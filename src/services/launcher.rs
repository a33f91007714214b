//! Child process launch with a configuration set injected.

use std::process::ExitStatus;
use tokio::process::Command;
use tracing::{info, instrument, warn};

use crate::domain::errors::{InitError, InitResult};
use crate::domain::models::ConfigurationSet;

/// Run `program` with `args`, inheriting stdio, with every key of `set`
/// added to its environment. The parent environment is left untouched.
#[instrument(skip(set, args), fields(args = args.len()))]
pub async fn launch(set: &ConfigurationSet, program: &str, args: &[String]) -> InitResult<ExitStatus> {
    let status = Command::new(program)
        .args(args)
        .envs(set.to_env_pairs())
        .status()
        .await
        .map_err(|source| InitError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if status.success() {
        info!(program = %program, "child exited successfully");
    } else {
        warn!(program = %program, code = ?status.code(), "child exited with failure");
    }
    Ok(status)
}

/// Exit code to propagate for a finished child.
///
/// Codes outside `0..=255` and signal terminations map to 1.
pub fn exit_code(status: ExitStatus) -> u8 {
    status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .unwrap_or(1)
}
