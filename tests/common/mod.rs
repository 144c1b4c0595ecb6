//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use coffeeshop_config::infrastructure::config::CONFIG_DIR;

/// The development configuration the frontend shipped with.
pub const SAMPLE_YAML: &str = r#"production: false
apiServerUrl: "http://127.0.0.1:5000"
auth0:
  url: dabolinux.us
  audience: CoffeeShopNew
  clientId: 0qFP6YXf2hS20ERx8TQJDmrTK1EmZ17q
  callbackURL: "http://localhost:8100"
"#;

/// Create a temporary project directory
///
/// Returns a TempDir that will be cleaned up when dropped.
pub fn temp_project() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `.coffeeshop/<name>` inside `project`.
pub fn write_config(project: &Path, name: &str, contents: &str) {
    let dir = project.join(CONFIG_DIR);
    fs::create_dir_all(&dir).expect("Failed to create config dir");
    fs::write(dir.join(name), contents).expect("Failed to write config file");
}

/// A project whose `config.yaml` holds `SAMPLE_YAML`.
pub fn sample_project() -> TempDir {
    let project = temp_project();
    write_config(project.path(), "config.yaml", SAMPLE_YAML);
    project
}

/// Parse `PREFIX_KEY='value'` lines as written by the `env` export, undoing
/// the shell quoting.
pub fn env_assignments(rendered: &str) -> Vec<(String, Option<String>)> {
    rendered
        .lines()
        .map(|line| {
            let (name, quoted) = line.split_once('=').expect("line should be an assignment");
            let inner = quoted
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
                .expect("value should be single-quoted");
            (name.to_string(), Some(inner.replace(r"'\''", "'")))
        })
        .collect()
}
