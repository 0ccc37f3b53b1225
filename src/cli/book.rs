//! Book command: selects seats and confirms the booking.

use std::path::Path;

use clap::Args;
use serde::Serialize;

use crate::booking::{BookingError, BookingReceipt};
use crate::cli::common::{
    build_controller, load_config, select_seats, to_json, CliError, CliResult, SkippedSeat,
};

/// Book one or more seats
#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    /// Seat to book, e.g. C-center-5 (repeatable)
    #[arg(short, long = "seat", value_name = "SEAT")]
    pub seats: Vec<String>,

    /// Seed for the pre-booked seats (overrides the config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output the receipt as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for a successful booking.
#[derive(Debug, Serialize)]
struct BookResponse<'a> {
    receipt: &'a BookingReceipt,
    total_display: String,
    skipped: Vec<SkippedSeat>,
}

impl BookArgs {
    /// Execute the book command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let mut controller = build_controller(&config, self.seed)?;

        let skipped = select_seats(&mut controller, &self.seats);
        for s in &skipped {
            eprintln!("Skipping seat '{}': {}", s.seat, s.reason);
        }

        let receipt = controller.book().map_err(|e| match e {
            BookingError::EmptySelection => CliError::validation(e.to_string()),
            other => CliError::io(format!("Booking failed: {other}")),
        })?;

        if self.json {
            let response = BookResponse {
                receipt: &receipt,
                total_display: receipt.total.with_symbol(&config.theater.currency),
                skipped,
            };
            println!("{}", to_json(&response)?);
        } else {
            println!(
                "{}",
                receipt.confirmation_message(&config.theater.currency, &config.theater.name)
            );
        }

        Ok(())
    }
}
