//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated test environment with a temporary data directory
//! and helpers for the usual register/admit/depart flows.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the lotkeeper data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("lotkeeper-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("lotkeeper").expect("Failed to find lotkeeper binary");
        // Keep project config files out of the picture
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("LOTKEEPER_DATA_DIR");
        cmd.env_remove("LOTKEEPER_INSIDE_LIMIT");
        cmd.env_remove("LOTKEEPER_RESERVATION_MINUTES");
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

    /// Register a resident car with the given plate.
    pub fn register_car(&self, plate: &str) {
        self.register(plate, "car", "resident");
    }

    /// Register a vehicle with the given plate, category and role.
    pub fn register(&self, plate: &str, category: &str, role: &str) {
        let output = self
            .command()
            .arg("register")
            .arg(plate)
            .arg("--category")
            .arg(category)
            .arg("--owner")
            .arg("Test Owner")
            .arg("--role")
            .arg(role)
            .output()
            .expect("Failed to run register command");

        assert!(
            output.status.success(),
            "Register failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Admit a vehicle and return the zone printed in quiet mode.
    pub fn admit(&self, plate: &str) -> String {
        let output = self
            .command()
            .arg("--quiet")
            .arg("admit")
            .arg(plate)
            .output()
            .expect("Failed to run admit command");

        assert!(
            output.status.success(),
            "Admit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}
