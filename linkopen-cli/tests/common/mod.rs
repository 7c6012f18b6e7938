//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that isolate the process from `LINKOPEN_*` variables

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the CLI that must not leak in from the host.
const ISOLATED_VARS: [&str; 6] = [
    "LINKOPEN_OPEN_APP",
    "LINKOPEN_WORKSPACE",
    "LINKOPEN_PLATFORM",
    "LINKOPEN_STRIP_LINE_SUFFIX",
    "LINKOPEN_LOG_MODE",
    "LINKOPEN_DATA_DIR",
];

/// Test environment with isolated data and project directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the user data directory
    pub data_dir: PathBuf,
    /// Directory commands run in, where project config files are discovered
    pub project_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("linkopen-data");
        let project_dir = temp_path.join("project");
        std::fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
            project_dir,
        }
    }

    /// Get a command builder with only the binary and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("linkopen").expect("Failed to find linkopen binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.project_dir);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `contents` to `name` inside the project directory.
    pub fn write_project_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.project_dir.join(name);
        std::fs::write(&path, contents).expect("Failed to write project file");
        path
    }

    /// Write the user configuration file.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        let path = self.data_dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// Run a command to completion and return its stdout.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid UTF-8.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run command");

        assert!(
            output.status.success(),
            "Command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
