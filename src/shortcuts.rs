//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context for the seat map screen.
pub const CONTEXT_MAIN: &str = "main";
/// Context for the sector picker shown on compact terminals.
pub const CONTEXT_PICKER: &str = "picker";
/// Context while a popup is open.
pub const CONTEXT_POPUP: &str = "popup";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Move the cursor one row towards the screen
    NavigateUp,
    /// Move the cursor one row back
    NavigateDown,
    /// Move the cursor one seat left (crossing aisles)
    NavigateLeft,
    /// Move the cursor one seat right (crossing aisles)
    NavigateRight,
    /// Jump to the first seat of the row
    JumpToFirst,
    /// Jump to the last seat of the row
    JumpToLast,

    // === SELECTION ===
    /// Select or deselect the seat under the cursor
    ToggleSeat,
    /// Drop every selected seat
    ClearSelection,
    /// Book the selected seats
    Book,

    // === SECTORS ===
    /// Show only the left block
    ShowLeft,
    /// Show only the center block
    ShowCenter,
    /// Show only the right block
    ShowRight,
    /// Back to every sector (or the picker on compact terminals)
    ShowAllSectors,

    // === HELP ===
    /// Show or hide the key reference
    ToggleHelp,

    // === GENERAL ===
    /// Dismiss a popup or go back
    Cancel,
    /// Leave the application
    Quit,
}

impl Action {
    /// Stable identifier for the action.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::JumpToFirst => "jump_first",
            Self::JumpToLast => "jump_last",
            Self::ToggleSeat => "toggle_seat",
            Self::ClearSelection => "clear_selection",
            Self::Book => "book",
            Self::ShowLeft => "show_left",
            Self::ShowCenter => "show_center",
            Self::ShowRight => "show_right",
            Self::ShowAllSectors => "show_all_sectors",
            Self::ToggleHelp => "toggle_help",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }
}

/// Key reference rows for the help popup: (keys, description).
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("↑ ↓ ← → / h j k l", "Move between seats"),
    ("Home / End", "First / last seat in row"),
    ("Space / Enter", "Select or deselect seat"),
    ("c", "Clear selection"),
    ("b", "Book selected seats"),
    ("1 / 2 / 3", "Left / center / right sector"),
    ("0 / Backspace", "All sectors"),
    ("?", "Toggle this help"),
    ("Esc", "Close popup / back"),
    ("q / Ctrl+Q", "Quit"),
];

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys held with it
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_picker_shortcuts();
        registry.register_popup_shortcuts();
        registry
    }

    /// Register all shortcuts for the seat map.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_MAIN;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === SELECTION ===
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleSeat);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleSeat);
        self.register(ctx, K::Char('c'), M::NONE, Action::ClearSelection);
        self.register(ctx, K::Char('b'), M::NONE, Action::Book);

        // === SECTORS ===
        self.register_sector_keys(ctx);
        self.register(ctx, K::Char('0'), M::NONE, Action::ShowAllSectors);
        self.register(ctx, K::Backspace, M::NONE, Action::ShowAllSectors);

        self.register_common(ctx);
    }

    /// Register shortcuts for the compact sector picker.
    fn register_picker_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_PICKER;

        self.register_sector_keys(ctx);
        self.register(ctx, K::Char('l'), M::NONE, Action::ShowLeft);
        self.register(ctx, K::Char('r'), M::NONE, Action::ShowRight);
        self.register(ctx, K::Char('b'), M::NONE, Action::Book);
        self.register(ctx, K::Char('c'), M::NONE, Action::ClearSelection);

        self.register_common(ctx);
    }

    /// Register shortcuts while a popup is open.
    fn register_popup_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_POPUP;

        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Enter, M::NONE, Action::Cancel);
        self.register(ctx, K::Char(' '), M::NONE, Action::Cancel);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    fn register_sector_keys(&mut self, ctx: &str) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Char('1'), M::NONE, Action::ShowLeft);
        self.register(ctx, K::Char('2'), M::NONE, Action::ShowCenter);
        self.register(ctx, K::Char('3'), M::NONE, Action::ShowRight);
    }

    fn register_common(&mut self, ctx: &str) {
        use KeyCode as K;
        use KeyModifiers as M;

        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    ///
    /// Terminals report shifted symbols such as `?` with the SHIFT modifier on
    /// some platforms, so character keys fall back to an unmodified lookup.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings
            .get(&(context.to_string(), binding))
            .copied()
            .or_else(|| match event.code {
                KeyCode::Char(_) if event.modifiers == KeyModifiers::SHIFT => self
                    .bindings
                    .get(&(context.to_string(), KeyBinding::new(event.code, KeyModifiers::NONE)))
                    .copied(),
                _ => None,
            })
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
