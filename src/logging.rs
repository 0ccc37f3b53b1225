//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so while it runs events go to a log file in
//! the config directory. Headless commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log output goes.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Write to stderr
    Stderr,
    /// Append to a file (created with its parent directory if missing)
    File(PathBuf),
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `debug` when verbose, `warn` if not.
pub fn init(verbose: bool, target: LogTarget) -> Result<()> {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install log subscriber")?,
        LogTarget::File(path) => {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .context(format!("Failed to create log directory: {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .context(format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install log subscriber")?;
        }
    }

    Ok(())
}
