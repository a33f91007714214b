//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak into a spawned binary.
pub const AMBIENT_VARS: &[&str] = &[
    "RUST_LOG",
    "SCENARIO_ENV_CONFIG",
    "SCENARIO_ENV_PROFILE",
    "SCENARIO_ENV_STRICT",
    "SCENARIO_ENV_MESHES_DIR",
    "SCENARIO_ENV_SCENARIO_DIR",
    "SCENARIO_ENV_REDIS_HOST",
    "SCENARIO_ENV_REDIS_PORT",
];

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `dir/name` and return the path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

/// Sample configuration with two profiles.
#[allow(dead_code)]
pub const SAMPLE_CONFIG: &str = r#"
defaults:
  redis_host: 10.0.0.5
profiles:
  lab:
    meshes_dir: /lab/meshes
    scenario_dir: /lab/scenario
  sim:
    meshes_dir: /sim/meshes
    scenario_dir: /sim/scenario
    redis_port: "6380"
"#;
