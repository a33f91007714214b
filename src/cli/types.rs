//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::exec::ExecArgs;
use crate::cli::commands::show::ShowArgs;
use crate::domain::models::overrides::parse_pair;
use crate::domain::models::{ConfigKey, Overrides};

#[derive(Parser, Debug)]
#[command(name = "scenario-env")]
#[command(
    about = "Resolve and publish MESHES_DIR, SCENARIO_DIR, REDIS_HOST and REDIS_PORT",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Defaults to `init`
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

// Flags accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (defaults to ./scenario-env.yaml when present)
    #[arg(short, long, global = true, env = "SCENARIO_ENV_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile from the configuration file
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Fail when a value resolves to an empty string
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Override MESHES_DIR
    #[arg(long, global = true, value_name = "DIR")]
    pub meshes_dir: Option<String>,

    /// Override SCENARIO_DIR
    #[arg(long, global = true, value_name = "DIR")]
    pub scenario_dir: Option<String>,

    /// Override REDIS_HOST
    #[arg(long, global = true, value_name = "HOST")]
    pub redis_host: Option<String>,

    /// Override REDIS_PORT
    #[arg(long, global = true, value_name = "PORT")]
    pub redis_port: Option<String>,

    /// Override any key; repeatable
    #[arg(long = "set", global = true, value_name = "KEY=VALUE", value_parser = parse_pair)]
    pub set: Vec<(ConfigKey, String)>,
}

impl GlobalArgs {
    /// Overrides given on the command line. Named flags win over `--set`.
    pub fn overrides(&self) -> Overrides {
        let mut overrides: Overrides = self.set.iter().cloned().collect();
        let named = [
            (ConfigKey::MeshesDir, &self.meshes_dir),
            (ConfigKey::ScenarioDir, &self.scenario_dir),
            (ConfigKey::RedisHost, &self.redis_host),
            (ConfigKey::RedisPort, &self.redis_port),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                overrides.set(key, value.clone());
            }
        }
        overrides
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve, publish and print the configuration set
    Init,

    /// Print the resolved configuration set without publishing it
    Show(ShowArgs),

    /// Run a program with the configuration set in its environment
    Exec(ExecArgs),

    /// List profiles defined in the configuration file
    Profiles,
}
