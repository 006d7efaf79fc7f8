//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Materializing fixture files and config files
//! - Executing CLI commands with proper context

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

use crate::fixtures::FixtureBuilder;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use viewdeck_testing::{FixtureBuilder, ListFixture, TestWorld};
///
/// let world = TestWorld::new()
///     .with_fixture(
///         FixtureBuilder::new("https://tenant.example.com/sites/docs")
///             .list(ListFixture::new("Working Document").view("v1", "Drafts")),
///     )
///     .with_config("https://tenant.example.com/sites/docs", "Working Document");
///
/// let result = world.run(&["show"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    fixture_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            fixture_path: None,
            config_path: None,
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn fixture_path(&self) -> Option<&Path> {
        self.fixture_path.as_deref()
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Materialize a fixture file the CLI will serve data from.
    pub fn with_fixture(mut self, fixture: FixtureBuilder) -> Self {
        let path = self.temp_dir.path().join("fixture.json");
        fixture.write_to(&path).expect("Failed to write fixture");
        self.fixture_path = Some(path);
        self
    }

    /// Write a config file naming the site and list to aggregate.
    pub fn with_config(mut self, site_url: &str, list_title: &str) -> Self {
        let path = self.temp_dir.path().join("viewdeck.toml");
        let content = format!(
            "site_url = {:?}\nlist_title = {:?}\n",
            site_url, list_title
        );
        std::fs::write(&path, content).expect("Failed to write config");
        self.config_path = Some(path);
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        if let Some(fixture) = &self.fixture_path {
            cmd.arg("--fixture").arg(fixture);
        }
        if let Some(config) = &self.config_path {
            cmd.arg("--config").arg(config);
        }
        cmd.current_dir(self.temp_dir.path());
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute a command using the project's binary and return the result.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("viewdeck")
            .map_err(|e| anyhow::anyhow!("Failed to find viewdeck binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI run.
pub struct CliResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON, for runs with `--format json`.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.stdout)
            .map_err(|e| anyhow::anyhow!("stdout is not valid JSON: {}\n{}", e, self.stdout))
    }
}
