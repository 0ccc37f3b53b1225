//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod cursor;
pub mod handlers;
pub mod popups;
pub mod seat_map;
pub mod sector_picker;
pub mod sidebar;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

use crate::booking::{BookingReceipt, SelectionController};
use crate::config::Config;
use crate::models::SeatId;
use crate::shortcuts::ShortcutRegistry;
use crate::view::Viewport;

pub use seat_map::SeatMapWidget;
pub use sector_picker::SectorPicker;
pub use sidebar::Sidebar;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Width of the selection sidebar in columns.
const SIDEBAR_WIDTH: u16 = 30;

/// Popup currently drawn over the seat map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    /// Key reference
    Help,
    /// Confirmation of a completed booking
    Receipt(BookingReceipt),
}

/// Application state - single source of truth.
pub struct AppState {
    // Core data
    /// Seats, selection and view scope
    pub controller: SelectionController,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Seat under the cursor
    pub cursor: SeatId,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Status bar message
    pub status_message: String,
    /// Validation or error message shown as an overlay (if any)
    pub error_message: Option<String>,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state for a controller, resolving the theme from config.
    #[must_use]
    pub fn new(config: Config, controller: SelectionController) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let cursor = cursor::home(controller.view().scope());
        Self {
            controller,
            config,
            theme,
            cursor,
            active_popup: None,
            status_message: String::new(),
            error_message: None,
            shortcuts: ShortcutRegistry::new(),
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Keeps the cursor inside the blocks currently on screen.
    pub fn sync_cursor(&mut self) {
        let theater = self.controller.registry().theater();
        self.cursor = cursor::clamp(theater, self.controller.view().scope(), self.cursor);
    }

    /// Classifies a terminal width and forwards it to the controller.
    ///
    /// Returns `true` when the compact/wide breakpoint was crossed.
    pub fn handle_resize(&mut self, width: u16) -> bool {
        let viewport = Viewport::from_width(width, self.config.ui.compact_width);
        let crossed = self.controller.on_viewport_change(viewport);
        if crossed {
            self.sync_cursor();
        }
        crossed
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let size = terminal.size().context("Failed to read terminal size")?;
    state.handle_resize(size.width);

    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Resize(width, _) => {
                    if state.handle_resize(width) {
                        debug!(width, "viewport changed");
                    }
                }
                _ => {}
            }
        }

        // Check if should quit
        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    match &state.active_popup {
        Some(PopupType::Help) => popups::render_help_popup(f, &state.theme),
        Some(PopupType::Receipt(receipt)) => popups::render_receipt_popup(
            f,
            receipt,
            &state.config.theater.currency,
            &state.config.theater.name,
            &state.theme,
        ),
        None => {}
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        popups::render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with venue name and seat counts
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let registry = state.controller.registry();
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", state.config.theater.name),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "| {} seats, {} available | {} per seat",
                registry.seat_count(),
                registry.available_count(),
                state
                    .controller
                    .seat_price()
                    .with_symbol(&state.config.theater.currency)
            ),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render seat map (or sector picker) next to the selection sidebar
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
        .split(area);

    if state.controller.view().shows_sector_picker() {
        SectorPicker::render(f, chunks[0], state);
    } else {
        SeatMapWidget::render(f, chunks[0], state);
    }
    Sidebar::render(f, chunks[1], state);
}

/// Handle keyboard input events. Returns `true` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    if state.controller.view().shows_sector_picker() {
        return handlers::handle_picker_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
