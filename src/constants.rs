//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Seatmap";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "seatmap";

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "Seatmap";

/// Log file written while the TUI owns the terminal.
pub const LOG_FILE_NAME: &str = "seatmap.log";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SEATMAP_CONFIG_DIR";
