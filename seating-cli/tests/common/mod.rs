//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with an isolated home and working directory
//! - Batch fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test.
const ISOLATED_VARS: &[&str] = &[
    "SEATING_CONFIG",
    "SEATING_LOG_MODE",
    "SEATING_START_DAY",
    "SEATING_CANCELLATION_WINDOW",
    "SEATING_OUTPUT_FORMAT",
];

/// One restaurant, open 10:00-14:00 every day, window [1, 7], groups of 2-6.
pub const SINGLE_RESTAURANT: &str = "1
R1 555-0100 7 1 2 6
10:00-14:00
10:00-14:00
10:00-14:00
10:00-14:00
10:00-14:00
10:00-14:00
10:00-14:00
";

/// Test environment with an isolated working and home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder running in the temp directory, with `HOME`
    /// pointing there and `SEATING_*` variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("seating").expect("Failed to find seating binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temp directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write a batch consisting of [`SINGLE_RESTAURANT`] followed by
    /// `commands`.
    pub fn write_batch(&self, commands: &str) -> PathBuf {
        self.write_file("batch.txt", &format!("{SINGLE_RESTAURANT}{commands}"))
    }

    /// Run `seating run <batch>` and return stdout lines.
    ///
    /// # Panics
    /// Panics if the command fails.
    pub fn run_lines(&self, batch: &Path) -> Vec<String> {
        let output = self
            .command()
            .arg("run")
            .arg(batch)
            .output()
            .expect("Failed to run seating");

        assert!(
            output.status.success(),
            "run failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
