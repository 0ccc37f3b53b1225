//! Cursor movement over the visible seats.
//!
//! The cursor is a seat id. Moving it never leaves the blocks of the current
//! scope; left/right walk across aisles, up/down keep the horizontal slot.

use crate::models::{Block, SeatId, TheaterLayout, ViewScope};

/// Seats of one row as they appear on screen for a scope.
fn visible_row(theater: &TheaterLayout, scope: ViewScope, row: u8) -> Vec<SeatId> {
    scope
        .blocks()
        .iter()
        .flat_map(|&block| theater.block_seats(row, block))
        .collect()
}

fn slot_of(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> usize {
    visible_row(theater, scope, cursor.row)
        .iter()
        .position(|id| *id == cursor)
        .unwrap_or(0)
}

fn seat_at(theater: &TheaterLayout, scope: ViewScope, row: u8, slot: usize) -> Option<SeatId> {
    let seats = visible_row(theater, scope, row);
    seats.get(slot.min(seats.len().saturating_sub(1))).copied()
}

/// First seat of the first row in scope.
#[must_use]
pub fn home(scope: ViewScope) -> SeatId {
    let block = scope.blocks().first().copied().unwrap_or(Block::Center);
    SeatId::new(1, block, 1)
}

/// Moves the cursor into `scope` if it is outside it.
///
/// Keeps the row and clamps the column into the scope's first block.
#[must_use]
pub fn clamp(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> SeatId {
    if scope.blocks().contains(&cursor.block) && theater.contains(&cursor) {
        return cursor;
    }
    let row = cursor.row.clamp(1, theater.total_rows());
    let block = scope.blocks().first().copied().unwrap_or(Block::Center);
    let col = cursor.col.clamp(1, theater.columns().get(block));
    SeatId::new(row, block, col)
}

/// Seat to the left, staying put at the row start.
#[must_use]
pub fn left(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> SeatId {
    let slot = slot_of(theater, scope, cursor);
    seat_at(theater, scope, cursor.row, slot.saturating_sub(1)).unwrap_or(cursor)
}

/// Seat to the right, staying put at the row end.
#[must_use]
pub fn right(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> SeatId {
    let slot = slot_of(theater, scope, cursor);
    seat_at(theater, scope, cursor.row, slot + 1).unwrap_or(cursor)
}

/// Same slot in the previous row.
#[must_use]
pub fn up(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> SeatId {
    if cursor.row <= 1 {
        return cursor;
    }
    let slot = slot_of(theater, scope, cursor);
    seat_at(theater, scope, cursor.row - 1, slot).unwrap_or(cursor)
}

/// Same slot in the next row.
#[must_use]
pub fn down(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> SeatId {
    if cursor.row >= theater.total_rows() {
        return cursor;
    }
    let slot = slot_of(theater, scope, cursor);
    seat_at(theater, scope, cursor.row + 1, slot).unwrap_or(cursor)
}

/// First visible seat of the cursor's row.
#[must_use]
pub fn row_start(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> SeatId {
    seat_at(theater, scope, cursor.row, 0).unwrap_or(cursor)
}

/// Last visible seat of the cursor's row.
#[must_use]
pub fn row_end(theater: &TheaterLayout, scope: ViewScope, cursor: SeatId) -> SeatId {
    seat_at(theater, scope, cursor.row, usize::MAX).unwrap_or(cursor)
}
