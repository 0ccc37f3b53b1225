//! Selection and booking handlers.

use anyhow::Result;
use tracing::warn;

use crate::booking::BookingError;
use crate::models::SeatStatus;
use crate::tui::{AppState, PopupType};

/// Select or deselect the seat under the cursor
pub fn handle_toggle_seat(state: &mut AppState) -> Result<bool> {
    let seat = state.cursor;
    match state.controller.toggle(&seat) {
        Some(SeatStatus::Selected) => state.set_status(format!("Selected {seat}")),
        Some(SeatStatus::Available) => state.set_status(format!("Deselected {seat}")),
        Some(SeatStatus::Occupied) => state.set_status(format!("{seat} is already booked")),
        None => state.set_status(format!("{seat} is not a seat")),
    }
    Ok(false)
}

/// Drop the whole selection
pub fn handle_clear_selection(state: &mut AppState) -> Result<bool> {
    state.controller.clear();
    state.set_status("Selection cleared");
    Ok(false)
}

/// Book the selected seats and show the receipt
pub fn handle_book(state: &mut AppState) -> Result<bool> {
    match state.controller.book() {
        Ok(receipt) => {
            state.set_status(format!("Booked {} seat(s)", receipt.seats.len()));
            state.active_popup = Some(PopupType::Receipt(receipt));
        }
        Err(BookingError::EmptySelection) => {
            state.set_error(BookingError::EmptySelection.to_string());
        }
        Err(e) => {
            warn!(error = %e, "booking refused");
            state.set_error(e.to_string());
        }
    }
    Ok(false)
}
