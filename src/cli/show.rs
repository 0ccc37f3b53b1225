//! Show command: prints the seat map for a scope.

use std::path::Path;

use clap::Args;

use crate::cli::common::{build_controller, load_config, select_seats, to_json, CliResult};
use crate::cli::render::{legend, render_seat_map, render_summary};
use crate::models::ViewScope;

/// Print the seat map
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Sector to show: all, left, center or right (unknown values show all)
    #[arg(short, long, default_value = "all")]
    pub scope: String,

    /// Seat to mark as selected, e.g. C-center-5 (repeatable)
    #[arg(long = "select", value_name = "SEAT")]
    pub select: Vec<String>,

    /// Seed for the pre-booked seats (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let mut controller = build_controller(&config, self.seed)?;

        for skipped in select_seats(&mut controller, &self.select) {
            eprintln!("Skipping seat '{}': {}", skipped.seat, skipped.reason);
        }

        let snapshot = controller.snapshot_for(ViewScope::parse_lenient(&self.scope));

        if self.json {
            println!("{}", to_json(&snapshot)?);
        } else {
            println!("{}", config.theater.name);
            println!();
            print!("{}", render_seat_map(&snapshot));
            println!();
            println!("{}", legend());
            println!("{}", render_summary(&snapshot, &config.theater.currency));
        }

        Ok(())
    }
}
