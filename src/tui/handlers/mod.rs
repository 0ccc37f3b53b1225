//! Input handler modules for different TUI contexts.

pub mod actions;
pub mod booking;
pub mod main;
pub mod navigation;
pub mod popups;

// Re-export handler functions
pub use actions::dispatch_action;
pub use main::{handle_main_input, handle_picker_input};
pub use popups::handle_popup_input;
