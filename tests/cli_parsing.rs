use clap::Parser;
use scenario_env::cli::commands::show::ShowArgs;
use scenario_env::cli::{Cli, Commands, OutputFormat};
use scenario_env::ConfigKey;
use std::path::PathBuf;

#[test]
fn test_parse_no_subcommand() {
    let cli = Cli::try_parse_from(["scenario-env"]).unwrap();

    assert!(cli.command.is_none());
    assert!(cli.global.overrides().is_empty());
    assert!(!cli.global.strict);
    assert!(!cli.global.json);
}

#[test]
fn test_parse_named_overrides() {
    let cli = Cli::try_parse_from([
        "scenario-env",
        "--meshes-dir",
        "/tmp/m",
        "--scenario-dir",
        "/tmp/s",
        "--redis-host",
        "10.0.0.5",
        "--redis-port",
        "6380",
    ])
    .unwrap();

    let overrides = cli.global.overrides();
    assert_eq!(overrides.len(), 4);
    assert_eq!(overrides.get(ConfigKey::MeshesDir), Some("/tmp/m"));
    assert_eq!(overrides.get(ConfigKey::ScenarioDir), Some("/tmp/s"));
    assert_eq!(overrides.get(ConfigKey::RedisHost), Some("10.0.0.5"));
    assert_eq!(overrides.get(ConfigKey::RedisPort), Some("6380"));
}

#[test]
fn test_parse_set_pairs() {
    let cli = Cli::try_parse_from([
        "scenario-env",
        "--set",
        "REDIS_PORT=7000",
        "--set",
        "meshes_dir=/data/meshes",
    ])
    .unwrap();

    assert_eq!(
        cli.global.set,
        vec![
            (ConfigKey::RedisPort, "7000".to_string()),
            (ConfigKey::MeshesDir, "/data/meshes".to_string()),
        ]
    );
}

#[test]
fn test_parse_set_rejects_unknown_key() {
    let err = Cli::try_parse_from(["scenario-env", "--set", "REDIS_DB=1"]).unwrap_err();
    assert!(err.to_string().contains("Unknown configuration key"));
}

#[test]
fn test_parse_set_rejects_malformed_pair() {
    let err = Cli::try_parse_from(["scenario-env", "--set", "REDIS_PORT"]).unwrap_err();
    assert!(err.to_string().contains("Expected KEY=VALUE"));
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "scenario-env",
        "show",
        "--format",
        "shell",
        "--profile",
        "lab",
        "--config",
        "/etc/scenario-env.yaml",
        "--strict",
        "-vv",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Show(ShowArgs { format })) => assert_eq!(format, OutputFormat::Shell),
        other => panic!("Wrong command: {other:?}"),
    }
    assert_eq!(cli.global.profile.as_deref(), Some("lab"));
    assert_eq!(
        cli.global.config,
        Some(PathBuf::from("/etc/scenario-env.yaml"))
    );
    assert!(cli.global.strict);
    assert_eq!(cli.global.verbose, 2);
}

#[test]
fn test_parse_show_defaults_to_human() {
    let cli = Cli::try_parse_from(["scenario-env", "show"]).unwrap();
    match cli.command {
        Some(Commands::Show(args)) => assert_eq!(args.format, OutputFormat::Human),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_exec_trailing_args() {
    let cli = Cli::try_parse_from([
        "scenario-env",
        "exec",
        "--quiet",
        "--",
        "viewer",
        "--meshes",
        "-x",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Exec(args)) => {
            assert!(args.quiet);
            assert_eq!(args.command, vec!["viewer", "--meshes", "-x"]);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_exec_requires_command() {
    assert!(Cli::try_parse_from(["scenario-env", "exec"]).is_err());
}

#[test]
fn test_parse_profiles() {
    let cli = Cli::try_parse_from(["scenario-env", "profiles", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Profiles)));
    assert!(cli.global.json);
}
