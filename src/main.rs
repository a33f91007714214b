//! scenario-env CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use scenario_env::cli::{handle_error, run, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.global.json;

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            handle_error(&err, json);
            ExitCode::FAILURE
        }
    }
}
