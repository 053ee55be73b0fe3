//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Isolated environment for driving the `fpadmin` binary.
///
/// # Example
/// ```no_run
/// use fpadmin_testing::TestWorld;
///
/// let world = TestWorld::new().persistent();
/// let result = world.run_json(&["user", "list", "--search", "青木"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    data_file: Option<PathBuf>,
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
        let data_dir = temp_dir.path().join(".fpadmin");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            data_file: None,
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Snapshot file the CLI reads and writes, once `persistent` was called
    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    /// Keep changes between runs by pointing `--data-file` into the temp dir.
    pub fn persistent(mut self) -> Self {
        self.data_file = Some(self.temp_dir.path().join("store.json"));
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        fixtures::write_config(&self.data_dir, toml).expect("Failed to write config");
        self
    }

    /// Seed the data file from the demo data with `demo_seed`. Implies
    /// `persistent`.
    pub fn with_seeded_snapshot(self, demo_seed: u64) -> Self {
        let world = self.persistent();
        if let Some(path) = &world.data_file {
            fixtures::write_seeded_snapshot(path, demo_seed).expect("Failed to write snapshot");
        }
        world
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this environment's data dir, data file,
    /// output format and env vars.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command, format: &str) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--format")
            .arg(format);

        if let Some(path) = &self.data_file {
            cmd.arg("--data-file").arg(path);
        }

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("FPADMIN_PATH");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run `fpadmin` with plain output.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(args, "plain")
    }

    /// Run `fpadmin` with `--format json`.
    pub fn run_json(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(args, "json")
    }

    #[allow(deprecated)]
    fn run_with_format(&self, args: &[&str], format: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("fpadmin")
            .map_err(|e| anyhow::anyhow!("Failed to find fpadmin binary: {}", e))?;

        self.configure_command(&mut cmd, format);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
