//! Responsive view state: current scope plus compact/wide viewport.

use serde::Serialize;

use crate::models::{Block, ViewScope};

/// Viewport width class reported by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Narrow screen: one sector at a time, with a sector picker
    Compact,
    /// Wide screen: the whole house
    Wide,
}

impl Viewport {
    /// Classifies a width against the breakpoint (`width <= breakpoint` is compact).
    #[must_use]
    pub const fn from_width(width: u16, breakpoint: u16) -> Self {
        if width <= breakpoint {
            Self::Compact
        } else {
            Self::Wide
        }
    }
}

/// Which part of the house is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewState {
    viewport: Viewport,
    current_sector: Option<Block>,
}

impl ViewState {
    /// Starts with every sector visible.
    #[must_use]
    pub const fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            current_sector: None,
        }
    }

    /// Current viewport class.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sector being shown on its own, if any.
    #[must_use]
    pub const fn current_sector(&self) -> Option<Block> {
        self.current_sector
    }

    /// Scope the seat map should be projected with.
    #[must_use]
    pub const fn scope(&self) -> ViewScope {
        match self.current_sector {
            Some(block) => ViewScope::Sector(block),
            None => ViewScope::All,
        }
    }

    /// Whether the sector picker replaces the seat map.
    ///
    /// Only compact viewports without a chosen sector show the picker.
    #[must_use]
    pub const fn shows_sector_picker(&self) -> bool {
        matches!(self.viewport, Viewport::Compact) && self.current_sector.is_none()
    }

    /// Shows a single sector.
    pub fn show_sector(&mut self, block: Block) {
        self.current_sector = Some(block);
    }

    /// Returns to the whole house (or the sector picker on compact screens).
    pub fn show_all_sectors(&mut self) {
        self.current_sector = None;
    }

    /// Applies a scope request directly.
    pub fn set_scope(&mut self, scope: ViewScope) {
        self.current_sector = match scope {
            ViewScope::All => None,
            ViewScope::Sector(block) => Some(block),
        };
    }

    /// Reacts to a viewport notification. Returns `true` if the breakpoint was crossed.
    ///
    /// Crossing to wide always shows all sectors. Crossing to compact keeps the
    /// sector that was on screen, if any.
    pub fn on_viewport_change(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        if viewport == Viewport::Wide {
            self.current_sector = None;
        }
        true
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(Viewport::Wide)
    }
}
