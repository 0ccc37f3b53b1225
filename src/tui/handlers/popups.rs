//! Popup input handler.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{Action, CONTEXT_POPUP};
use crate::tui::{AppState, PopupType};

/// Handle input while a popup is open
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.shortcuts.lookup(CONTEXT_POPUP, key) {
        Some(Action::Cancel) => {
            if matches!(state.active_popup, Some(PopupType::Receipt(_))) {
                state.set_status("Booking complete. Select more seats or press q to quit.");
            }
            state.active_popup = None;
            Ok(false)
        }
        Some(Action::ToggleHelp) if state.active_popup == Some(PopupType::Help) => {
            state.active_popup = None;
            Ok(false)
        }
        Some(Action::Quit) => {
            state.should_quit = true;
            Ok(true)
        }
        // Block everything else while the popup is open
        _ => Ok(false),
    }
}
