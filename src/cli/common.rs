//! Shared CLI error type, exit codes and helpers.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::booking::SelectionController;
use crate::config::Config;
use crate::models::{SeatId, SeatStatus};

/// Process exit codes used by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// User input was rejected (e.g. booking with no seats)
    Validation = 1,
    /// Configuration or file system failure
    Io = 2,
}

/// Error returned by CLI commands, carrying the exit code to use.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code for the process
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// User-facing validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Configuration or I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Numeric exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.code as i32
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the config from an explicit path or the platform default.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    result.map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))
}

/// Builds a controller from config, honoring an explicit seed.
pub fn build_controller(config: &Config, seed: Option<u64>) -> CliResult<SelectionController> {
    let registry = config
        .theater
        .build_registry(seed)
        .map_err(|e| CliError::io(format!("Failed to build seat map: {e:#}")))?;
    Ok(SelectionController::new(registry))
}

/// A seat argument that was not added to the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSeat {
    /// The argument as given
    pub seat: String,
    /// Why it was skipped
    pub reason: String,
}

/// Selects every seat named on the command line.
///
/// Malformed, unknown and occupied ids are skipped and reported; repeating
/// an id selects it once.
pub fn select_seats(controller: &mut SelectionController, raw_ids: &[String]) -> Vec<SkippedSeat> {
    let mut skipped = Vec::new();
    for raw in raw_ids {
        let id = match raw.parse::<SeatId>() {
            Ok(id) => id,
            Err(e) => {
                warn!(seat = %raw, error = %e, "invalid seat id");
                skipped.push(SkippedSeat {
                    seat: raw.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if controller.is_selected(&id) {
            continue;
        }

        let reason = match controller.toggle(&id) {
            Some(SeatStatus::Selected | SeatStatus::Available) => continue,
            Some(SeatStatus::Occupied) => "seat is already occupied",
            None => "seat does not exist in this theater",
        };
        skipped.push(SkippedSeat {
            seat: raw.clone(),
            reason: reason.to_string(),
        });
    }
    skipped
}

/// Serializes a value as pretty JSON for stdout.
pub fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}
