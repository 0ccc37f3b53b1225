//! CLI command handlers for Seatmap.
//!
//! This module provides headless, scriptable access to the seat map,
//! booking flow and configuration for automation and testing.

pub mod book;
pub mod common;
pub mod config;
pub mod render;
pub mod show;

// Re-export types used by main.rs and tests
pub use book::BookArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use show::ShowArgs;
