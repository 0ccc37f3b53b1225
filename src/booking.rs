//! Selection controller: the user's pending seats, totals and bookings.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{Block, Price, SeatId, SeatStatus, ViewScope};
use crate::registry::{RowView, SeatRegistry};
use crate::view::{ViewState, Viewport};

/// Reasons a booking can be refused. None of them change any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// Nothing is selected
    #[error("Please select at least one seat.")]
    EmptySelection,
    /// A selected id is not part of the layout
    #[error("Seat {0} does not exist in this theater")]
    UnknownSeat(SeatId),
    /// A selected seat was occupied in the meantime
    #[error("Seat {0} is no longer available")]
    SeatUnavailable(SeatId),
}

/// Confirmation handed to the notification collaborator after a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingReceipt {
    /// Receipt identifier
    pub id: Uuid,
    /// Booked seats, sorted by their string form
    pub seats: Vec<SeatId>,
    /// Amount charged
    pub total: Price,
    /// When the booking was confirmed
    pub booked_at: DateTime<Utc>,
}

impl BookingReceipt {
    /// Seat ids as display strings, in receipt order.
    #[must_use]
    pub fn seat_labels(&self) -> Vec<String> {
        self.seats.iter().map(ToString::to_string).collect()
    }

    /// Multi-line confirmation text for the user.
    #[must_use]
    pub fn confirmation_message(&self, currency: &str, venue: &str) -> String {
        format!(
            "Booking confirmed!\n\nSeats: {}\nTotal: {}\n\nThank you for choosing {}!",
            self.seat_labels().join(", "),
            self.total.with_symbol(currency),
            venue
        )
    }
}

/// Seat map projection with the selection overlay applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatMapSnapshot {
    /// Scope the rows were projected with
    pub scope: ViewScope,
    /// Projected rows
    pub rows: Vec<RowView>,
    /// Selected seats, sorted for display
    pub selected: Vec<SeatId>,
    /// Running total for the selection
    pub total: Price,
}

impl SeatMapSnapshot {
    /// Looks up the status of a seat in this snapshot.
    #[must_use]
    pub fn status_of(&self, id: &SeatId) -> Option<SeatStatus> {
        self.rows
            .iter()
            .flat_map(RowView::seats)
            .find(|s| s.id == *id)
            .map(|s| s.status)
    }
}

/// Sorts seat ids lexicographically by their string form.
fn sort_for_display(ids: impl IntoIterator<Item = SeatId>) -> Vec<SeatId> {
    let mut ids: Vec<SeatId> = ids.into_iter().collect();
    ids.sort_by_cached_key(ToString::to_string);
    ids
}

/// Owns the registry, the selection set and the view state.
///
/// Invariant: every selected seat is known to the registry and not occupied.
#[derive(Debug, Clone)]
pub struct SelectionController {
    registry: SeatRegistry,
    selection: BTreeSet<SeatId>,
    view: ViewState,
}

impl SelectionController {
    /// Wraps a registry with an empty selection and a wide view.
    #[must_use]
    pub fn new(registry: SeatRegistry) -> Self {
        Self {
            registry,
            selection: BTreeSet::new(),
            view: ViewState::default(),
        }
    }

    /// Starts in the given viewport class.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.view = ViewState::new(viewport);
        self
    }

    /// Read access to the seat registry.
    #[must_use]
    pub const fn registry(&self) -> &SeatRegistry {
        &self.registry
    }

    /// Current view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Price of one seat.
    #[must_use]
    pub const fn seat_price(&self) -> Price {
        self.registry.theater().seat_price()
    }

    /// Flips a seat in or out of the selection.
    ///
    /// Occupied seats are left alone and report `Occupied`. Unknown ids are
    /// logged and report `None`.
    pub fn toggle(&mut self, id: &SeatId) -> Option<SeatStatus> {
        match self.registry.is_occupied(id) {
            None => {
                warn!(seat = %id, "ignoring toggle of unknown seat");
                None
            }
            Some(true) => {
                debug!(seat = %id, "ignoring toggle of occupied seat");
                Some(SeatStatus::Occupied)
            }
            Some(false) => {
                if self.selection.remove(id) {
                    debug!(seat = %id, "deselected");
                    Some(SeatStatus::Available)
                } else {
                    self.selection.insert(*id);
                    debug!(seat = %id, "selected");
                    Some(SeatStatus::Selected)
                }
            }
        }
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Number of selected seats.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Whether a seat is in the selection.
    #[must_use]
    pub fn is_selected(&self, id: &SeatId) -> bool {
        self.selection.contains(id)
    }

    /// Selected seats sorted for display.
    #[must_use]
    pub fn selected(&self) -> Vec<SeatId> {
        sort_for_display(self.selection.iter().copied())
    }

    /// Selection size times seat price.
    #[must_use]
    pub fn total(&self) -> Price {
        self.seat_price().times(self.selection.len())
    }

    /// Registry status with the selection overlaid; `None` for unknown ids.
    #[must_use]
    pub fn status(&self, id: &SeatId) -> Option<SeatStatus> {
        self.registry.status(id).map(|status| {
            if status == SeatStatus::Available && self.selection.contains(id) {
                SeatStatus::Selected
            } else {
                status
            }
        })
    }

    /// Books every selected seat.
    ///
    /// Either all selected seats become occupied and the selection is
    /// cleared, or nothing changes and an error is returned.
    pub fn book(&mut self) -> Result<BookingReceipt, BookingError> {
        if self.selection.is_empty() {
            return Err(BookingError::EmptySelection);
        }

        for id in &self.selection {
            match self.registry.is_occupied(id) {
                None => return Err(BookingError::UnknownSeat(*id)),
                Some(true) => return Err(BookingError::SeatUnavailable(*id)),
                Some(false) => {}
            }
        }

        let seats: Vec<SeatId> = self.selection.iter().copied().collect();
        let total = self.total();
        self.registry.mark_occupied(&seats);
        self.selection.clear();

        let receipt = BookingReceipt {
            id: Uuid::new_v4(),
            seats: sort_for_display(seats),
            total,
            booked_at: Utc::now(),
        };
        info!(
            receipt = %receipt.id,
            seats = receipt.seats.len(),
            total = %receipt.total,
            "booking confirmed"
        );
        Ok(receipt)
    }

    /// Projects the seat map for an explicit scope.
    #[must_use]
    pub fn snapshot_for(&self, scope: ViewScope) -> SeatMapSnapshot {
        let rows = self
            .registry
            .layout(scope)
            .map(|mut row| {
                for seat in row.seats_mut() {
                    if seat.status == SeatStatus::Available && self.selection.contains(&seat.id) {
                        seat.status = SeatStatus::Selected;
                    }
                }
                row
            })
            .collect();

        SeatMapSnapshot {
            scope,
            rows,
            selected: self.selected(),
            total: self.total(),
        }
    }

    /// Projects the seat map for the current view scope.
    #[must_use]
    pub fn snapshot(&self) -> SeatMapSnapshot {
        self.snapshot_for(self.view.scope())
    }

    /// Switches the view scope. Never touches seat state.
    pub fn set_scope(&mut self, scope: ViewScope) {
        debug!(%scope, "scope changed");
        self.view.set_scope(scope);
    }

    /// Shows one sector on its own.
    pub fn show_sector(&mut self, block: Block) {
        self.set_scope(ViewScope::Sector(block));
    }

    /// Returns to every sector.
    pub fn show_all_sectors(&mut self) {
        self.set_scope(ViewScope::All);
    }

    /// Handles a viewport notification from the renderer.
    ///
    /// Returns `true` when the breakpoint was crossed and a re-render is due.
    pub fn on_viewport_change(&mut self, viewport: Viewport) -> bool {
        let crossed = self.view.on_viewport_change(viewport);
        if crossed {
            debug!(?viewport, scope = %self.view.scope(), "breakpoint crossed");
        }
        crossed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockColumns, TheaterLayout};

    fn controller() -> SelectionController {
        let theater =
            TheaterLayout::new(vec![1], BlockColumns::new(2, 2, 2), Price::from_cents(1250)).unwrap();
        SelectionController::new(SeatRegistry::new(theater))
    }

    fn id(raw: &str) -> SeatId {
        raw.parse().unwrap()
    }

    #[test]
    fn test_toggle_selects_and_deselects() {
        let mut ctl = controller();
        assert_eq!(ctl.toggle(&id("A-left-1")), Some(SeatStatus::Selected));
        assert!(ctl.is_selected(&id("A-left-1")));
        assert_eq!(ctl.toggle(&id("A-left-1")), Some(SeatStatus::Available));
        assert!(!ctl.is_selected(&id("A-left-1")));
        assert_eq!(ctl.selection_len(), 0);
    }

    #[test]
    fn test_toggle_unknown_seat() {
        let mut ctl = controller();
        assert_eq!(ctl.toggle(&id("B-left-1")), None);
        assert_eq!(ctl.toggle(&id("A-center-3")), None);
        assert_eq!(ctl.selection_len(), 0);
    }

    #[test]
    fn test_toggle_occupied_is_noop() {
        let mut ctl = controller();
        ctl.toggle(&id("A-right-1"));
        ctl.book().unwrap();

        ctl.toggle(&id("A-left-2"));
        assert_eq!(ctl.toggle(&id("A-right-1")), Some(SeatStatus::Occupied));
        assert_eq!(ctl.selection_len(), 1);
        assert_eq!(ctl.status(&id("A-right-1")), Some(SeatStatus::Occupied));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut ctl = controller();
        ctl.toggle(&id("A-left-1"));
        ctl.toggle(&id("A-center-1"));
        ctl.clear();
        assert_eq!(ctl.selection_len(), 0);
        ctl.clear();
        assert_eq!(ctl.selection_len(), 0);
        assert_eq!(ctl.total(), Price::ZERO);
    }

    #[test]
    fn test_total_tracks_selection() {
        let mut ctl = controller();
        assert_eq!(ctl.total().to_string(), "0.00");
        ctl.toggle(&id("A-left-1"));
        assert_eq!(ctl.total().to_string(), "12.50");
        ctl.toggle(&id("A-left-2"));
        ctl.toggle(&id("A-right-2"));
        assert_eq!(ctl.total().to_string(), "37.50");
    }

    #[test]
    fn test_book_empty_selection() {
        let mut ctl = controller();
        let before = ctl.snapshot();
        assert_eq!(ctl.book(), Err(BookingError::EmptySelection));
        assert_eq!(ctl.snapshot(), before);
        assert_eq!(ctl.registry().occupied_count(), 0);
    }

    #[test]
    fn test_book_marks_occupied_and_clears() {
        let mut ctl = controller();
        ctl.toggle(&id("A-left-1"));
        ctl.toggle(&id("A-center-2"));

        let receipt = ctl.book().unwrap();
        assert_eq!(receipt.seat_labels(), vec!["A-center-2", "A-left-1"]);
        assert_eq!(receipt.total.to_string(), "25.00");
        assert_eq!(ctl.selection_len(), 0);
        assert_eq!(ctl.registry().is_occupied(&id("A-left-1")), Some(true));
        assert_eq!(ctl.registry().is_occupied(&id("A-center-2")), Some(true));
        assert_eq!(ctl.registry().occupied_count(), 2);
    }

    #[test]
    fn test_confirmation_message() {
        let mut ctl = controller();
        ctl.toggle(&id("A-right-1"));
        let receipt = ctl.book().unwrap();
        let message = receipt.confirmation_message("$", "Sugarland Theaters");
        assert!(message.starts_with("Booking confirmed!"));
        assert!(message.contains("Seats: A-right-1"));
        assert!(message.contains("Total: $12.50"));
        assert!(message.ends_with("Thank you for choosing Sugarland Theaters!"));
    }

    #[test]
    fn test_snapshot_overlays_selection() {
        let mut ctl = controller();
        ctl.toggle(&id("A-center-1"));
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.status_of(&id("A-center-1")), Some(SeatStatus::Selected));
        assert_eq!(snapshot.status_of(&id("A-center-2")), Some(SeatStatus::Available));
        assert_eq!(snapshot.selected, vec![id("A-center-1")]);
        assert_eq!(snapshot.total, Price::from_cents(1250));
    }

    #[test]
    fn test_selection_survives_scope_change() {
        let mut ctl = controller();
        ctl.toggle(&id("A-left-1"));
        ctl.toggle(&id("A-right-2"));

        ctl.show_sector(Block::Center);
        let center = ctl.snapshot();
        assert_eq!(center.scope, ViewScope::Sector(Block::Center));
        assert_eq!(center.status_of(&id("A-left-1")), None);
        assert_eq!(center.selected.len(), 2);

        ctl.show_all_sectors();
        assert_eq!(ctl.snapshot().status_of(&id("A-left-1")), Some(SeatStatus::Selected));
    }

    #[test]
    fn test_scope_round_trip_keeps_snapshot() {
        let mut ctl = controller();
        ctl.toggle(&id("A-left-1"));
        let before = ctl.snapshot();

        ctl.set_scope(ViewScope::Sector(Block::Left));
        assert_eq!(ctl.snapshot().scope, ViewScope::Sector(Block::Left));
        ctl.set_scope(ViewScope::All);

        assert_eq!(ctl.snapshot(), before);
    }

    #[test]
    fn test_selected_sorts_lexicographically() {
        let theater =
            TheaterLayout::new(vec![2], BlockColumns::new(2, 12, 2), Price::from_cents(100)).unwrap();
        let mut ctl = SelectionController::new(SeatRegistry::new(theater));
        for raw in ["B-left-1", "A-center-10", "A-center-2", "A-right-1"] {
            ctl.toggle(&id(raw));
        }
        let labels: Vec<String> = ctl.selected().iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec!["A-center-10", "A-center-2", "A-right-1", "B-left-1"]);
    }
}
