//! Cursor and sector navigation handlers.

use anyhow::Result;

use crate::models::{Block, SeatId, TheaterLayout, ViewScope};
use crate::tui::{cursor, AppState};

fn move_cursor(state: &mut AppState, step: fn(&TheaterLayout, ViewScope, SeatId) -> SeatId) {
    let scope = state.controller.view().scope();
    state.cursor = step(state.controller.registry().theater(), scope, state.cursor);
    state.status_message.clear();
}

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    move_cursor(state, cursor::up);
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    move_cursor(state, cursor::down);
    Ok(false)
}

/// Handle navigate left action
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    move_cursor(state, cursor::left);
    Ok(false)
}

/// Handle navigate right action
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    move_cursor(state, cursor::right);
    Ok(false)
}

/// Handle jump to first seat in row
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    move_cursor(state, cursor::row_start);
    Ok(false)
}

/// Handle jump to last seat in row
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    move_cursor(state, cursor::row_end);
    Ok(false)
}

/// Show a single sector
pub fn handle_show_sector(state: &mut AppState, block: Block) -> Result<bool> {
    state.controller.show_sector(block);
    state.sync_cursor();
    state.set_status(format!("{} sector", block.title()));
    Ok(false)
}

/// Back to every sector (the picker on compact terminals)
pub fn handle_show_all_sectors(state: &mut AppState) -> Result<bool> {
    state.controller.show_all_sectors();
    state.sync_cursor();
    state.status_message.clear();
    Ok(false)
}

/// Esc outside popups: leave a single-sector view
pub fn handle_cancel(state: &mut AppState) -> Result<bool> {
    if state.controller.view().current_sector().is_some() {
        return handle_show_all_sectors(state);
    }
    state.status_message.clear();
    Ok(false)
}
