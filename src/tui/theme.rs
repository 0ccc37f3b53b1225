//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that automatically
//! detects the OS theme (dark/light mode) and applies appropriate colors.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::SeatStatus;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights and key hints
    pub accent: Color,
    /// Success state color for confirmations
    pub success: Color,
    /// Error state color for errors and validation messages
    pub error: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Background behind the seat under the cursor
    pub highlight_bg: Color,

    // Seats
    /// Seat that can be selected
    pub seat_available: Color,
    /// Seat in the pending selection
    pub seat_selected: Color,
    /// Seat that is already booked
    pub seat_occupied: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves the configured theme preference.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,

            seat_available: Color::Green,
            seat_selected: Color::Yellow,
            seat_occupied: Color::Red,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Seat colors are darkened so they stay readable on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(210, 210, 210),

            seat_available: Color::Rgb(0, 128, 0),
            seat_selected: Color::Rgb(180, 100, 0),
            seat_occupied: Color::Rgb(170, 0, 0),
        }
    }

    /// Foreground color for a seat status.
    #[must_use]
    pub const fn seat_color(&self, status: SeatStatus) -> Color {
        match status {
            SeatStatus::Available => self.seat_available,
            SeatStatus::Selected => self.seat_selected,
            SeatStatus::Occupied => self.seat_occupied,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
