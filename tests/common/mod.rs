#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the compiled binary under test
pub fn incident_board_binary() -> &'static str {
    env!("CARGO_BIN_EXE_incident-board")
}

/// Helper struct to run incident-board commands with an isolated config file
pub struct BoardTest {
    pub temp_dir: TempDir,
}

impl BoardTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        BoardTest { temp_dir }
    }

    /// Path the binary reads its configuration from; absent until written
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Write a JSON seed file and return its path
    pub fn write_seed(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("seed.json");
        fs::write(&path, content).expect("Failed to write seed file");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(incident_board_binary())
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("INCIDENT_BOARD_CONFIG", self.config_path())
            .env_remove("INCIDENT_BOARD_LOG")
            .env_remove("FORCE_COLOR")
            .env_remove("CLICOLOR_FORCE")
            .output()
            .expect("Failed to execute incident-board command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for BoardTest {
    fn default() -> Self {
        Self::new()
    }
}
