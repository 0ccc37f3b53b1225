//! Seatmap - Terminal seat picker for theater bookings
//!
//! Without a subcommand the interactive seat map starts. The `show`, `book`
//! and `config` subcommands give headless access for scripts and tests.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use seatmap::booking::SelectionController;
use seatmap::cli::{BookArgs, CliError, ConfigArgs, ShowArgs};
use seatmap::config::Config;
use seatmap::constants::LOG_FILE_NAME;
use seatmap::logging::{self, LogTarget};
use seatmap::tui;

/// Seatmap - Terminal seat picker for theater bookings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an alternative config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the seat map
    Show(ShowArgs),
    /// Select seats and book them
    Book(BookArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return run_interactive(cli.config, cli.verbose);
    };

    // Logging is best effort for headless commands
    let _ = logging::init(cli.verbose, LogTarget::Stderr);

    let config_path = cli.config.as_deref();
    let result = match command {
        Command::Show(args) => args.execute(config_path),
        Command::Book(args) => args.execute(config_path),
        Command::Config(args) => args.execute(config_path),
    };

    if let Err(e) = result {
        report_and_exit(&e);
    }

    Ok(())
}

fn report_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {error}");
    std::process::exit(error.exit_code());
}

fn run_interactive(config_path: Option<PathBuf>, verbose: bool) -> Result<()> {
    let log_path = Config::config_dir()?.join(LOG_FILE_NAME);
    logging::init(verbose, LogTarget::File(log_path))?;

    let config = match config_path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    let registry = config
        .theater
        .build_registry(None)
        .context("Failed to build seat map")?;
    info!(
        seats = registry.seat_count(),
        occupied = registry.occupied_count(),
        "starting seat map"
    );

    let controller = SelectionController::new(registry);
    let mut app_state = tui::AppState::new(config, controller);

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    result
}
