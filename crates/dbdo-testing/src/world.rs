//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated temp directory
//! - Placing sample databases, SQL scripts and config files in it
//! - Executing the CLI with that directory as its working directory

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::fixtures::SampleDatabase;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use dbdo_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_sample_database("app.db")
///     .with_script("users.sql", "SELECT * FROM users;");
///
/// let result = world.run(&["-d", "app.db", "-s", "users.sql"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
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
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Resolve a path relative to the temp root.
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Create `users` and `sample_table` in a database file named `name`.
    pub fn with_sample_database(self, name: &str) -> Self {
        SampleDatabase::create(self.path(name)).expect("Failed to create sample database");
        self
    }

    /// Create a database file named `name` and run `sql` against it.
    pub fn with_database(self, name: &str, sql: &str) -> Self {
        let db = SampleDatabase::empty(self.path(name)).expect("Failed to create database");
        db.execute(sql).expect("Failed to populate database");
        self
    }

    /// Write a SQL script file.
    pub fn with_script(self, name: &str, sql: &str) -> Self {
        std::fs::write(self.path(name), sql).expect("Failed to write script");
        self
    }

    /// Write the config file the CLI will load.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The config file is always pinned inside the temp dir so a developer's
    /// own `~/.config/dbdo/config.toml` never leaks into tests.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("DBDO_CONFIG", &self.config_path)
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the dbdo binary with `args`.
    ///
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built (which cargo test does automatically for the CLI crate's tests).
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("dbdo")
            .map_err(|e| anyhow::anyhow!("Failed to find dbdo binary: {}", e))?;

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

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Process exit code, if the process was not killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Non-empty stdout lines with surrounding whitespace removed.
    pub fn content_lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
