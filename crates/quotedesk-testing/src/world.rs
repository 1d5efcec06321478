//! TestWorld pattern for declarative integration test setup.

use anyhow::{Context, Result};
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated quotedesk workspace driven through the real binary.
///
/// # Example
/// ```no_run
/// use quotedesk_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["quote", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    format: String,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".quotedesk");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            data_dir,
            format: "plain".to_string(),
            env_vars: HashMap::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Output format passed to every command (`plain` by default).
    pub fn with_format(mut self, format: &str) -> Self {
        self.format = format.to_string();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.data_dir.join("config.toml"), toml).expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("quotedesk.db")
    }

    /// Apply data-dir, format and env vars to a command.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        self.configure_with_format(cmd, &self.format)
    }

    fn configure_with_format<'a>(&self, cmd: &'a mut Command, format: &str) -> &'a mut Command {
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--format")
            .arg(format);

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("QUOTEDESK_PATH");
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run the `quotedesk` binary with `args`.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        self.run_with_format(&self.format, args)
    }

    #[allow(deprecated)]
    fn run_with_format(&self, format: &str, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("quotedesk")
            .map_err(|e| anyhow::anyhow!("Failed to find quotedesk binary: {}", e))?;

        self.configure_with_format(&mut cmd, format);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` regardless of the world's default and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<serde_json::Value> {
        let result = self.run_with_format("json", args)?;
        if !result.success() {
            anyhow::bail!(
                "quotedesk {:?} failed: {}",
                args,
                result.stderr().trim_end()
            );
        }
        result
            .json()
            .with_context(|| format!("stdout of {:?} is not JSON: {}", args, result.stdout()))
    }

    /// Log in with the default demo credentials for `role`.
    pub fn login_as(&self, role: &str) -> Result<CliResult> {
        let (email, password) = match role {
            "contractor" => ("engineer@contractorpro.com", "admin123"),
            _ => ("client@contractorpro.com", "client123"),
        };
        self.run(&[
            "login",
            "--email",
            email,
            "--password",
            password,
            "--role",
            role,
        ])
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
