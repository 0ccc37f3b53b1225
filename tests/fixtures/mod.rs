//! Shared test fixtures for E2E CLI and booking flow tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use seatmap::config::{Config, TheaterConfig, ThemeMode, UiConfig};
use seatmap::models::{BlockColumns, Price};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Path to the seatmap binary
pub fn seatmap_bin() -> String {
    std::env::var("CARGO_BIN_EXE_seatmap").unwrap_or_else(|_| "target/release/seatmap".to_string())
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(seatmap_bin());
    cmd.env("SEATMAP_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// A single row of 2 / 2 / 2 seats at 12.50 with nothing pre-booked.
pub fn small_theater_config() -> Config {
    Config {
        theater: TheaterConfig {
            name: "Test Hall".to_string(),
            section_rows: vec![1],
            seat_price: "12.50".parse::<Price>().unwrap(),
            currency: "$".to_string(),
            occupancy: 0.0,
            seed: Some(7),
            columns: BlockColumns::new(2, 2, 2),
        },
        ui: UiConfig {
            theme_mode: ThemeMode::Dark,
            compact_width: 100,
        },
    }
}

/// Two sections of 2 and 1 rows with 2 / 4 / 2 seats.
pub fn sectioned_theater_config() -> Config {
    let mut config = small_theater_config();
    config.theater.section_rows = vec![2, 1];
    config.theater.columns = BlockColumns::new(2, 4, 2);
    config
}

/// Writes a config into a fresh temp dir as `config.toml`.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub fn write_config(config: &Config) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    config.save_to(&path).expect("Failed to write test config");
    (dir, path)
}

/// Runs a command and returns (exit code, stdout, stderr).
pub fn run(mut cmd: Command) -> (Option<i32>, String, String) {
    let output = cmd.output().expect("Failed to execute command");
    (
        output.status.code(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}
