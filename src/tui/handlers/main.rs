//! Seat map and sector picker input handlers.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{CONTEXT_MAIN, CONTEXT_PICKER};
use crate::tui::AppState;

/// Handle input for the seat map
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(CONTEXT_MAIN, key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}

/// Handle input for the compact sector picker
pub fn handle_picker_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(action) = state.shortcuts.lookup(CONTEXT_PICKER, key) {
        super::dispatch_action(state, action)
    } else {
        Ok(false)
    }
}
