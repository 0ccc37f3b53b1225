//! Action dispatch.

use anyhow::Result;
use tracing::trace;

use crate::models::Block;
use crate::shortcuts::Action;
use crate::tui::{AppState, PopupType};

use super::{booking, navigation};

/// Dispatch an action to its handler. Returns `true` when the app should quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    trace!(action = action.id(), "dispatch");
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),

        // Selection
        Action::ToggleSeat => booking::handle_toggle_seat(state),
        Action::ClearSelection => booking::handle_clear_selection(state),
        Action::Book => booking::handle_book(state),

        // Sectors
        Action::ShowLeft => navigation::handle_show_sector(state, Block::Left),
        Action::ShowCenter => navigation::handle_show_sector(state, Block::Center),
        Action::ShowRight => navigation::handle_show_sector(state, Block::Right),
        Action::ShowAllSectors => navigation::handle_show_all_sectors(state),

        // Popups
        Action::ToggleHelp => {
            state.active_popup = match state.active_popup {
                Some(PopupType::Help) => None,
                _ => Some(PopupType::Help),
            };
            Ok(false)
        }
        Action::Cancel => navigation::handle_cancel(state),

        Action::Quit => {
            state.should_quit = true;
            Ok(true)
        }
    }
}
