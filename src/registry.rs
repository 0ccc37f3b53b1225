//! Seat registry: canonical seats, their coordinates and occupancy.
//!
//! The registry owns the "occupied" half of seat state. Selection lives in
//! [`crate::booking::SelectionController`], which overlays it on the rows
//! produced by [`SeatRegistry::layout`].

use std::collections::HashSet;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{Block, SeatId, SeatStatus, TheaterLayout, ViewScope};

/// Source of uniform random indices used to seed occupancy.
///
/// Every [`rand::Rng`] is a `RandomSource`; tests can supply a scripted one.
pub trait RandomSource {
    /// Returns a uniformly distributed index in `0..bound` (`bound > 0`).
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// One seat in a projected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatView {
    /// Seat identifier
    pub id: SeatId,
    /// Status at projection time
    pub status: SeatStatus,
}

/// The seats of one block within a projected row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    /// Which block these seats belong to
    pub block: Block,
    /// Seats in ascending column order
    pub seats: Vec<SeatView>,
}

/// One projected row of the seat map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// 1-based row index
    pub row: u8,
    /// Row letter
    pub label: char,
    /// 0-based section the row belongs to
    pub section: usize,
    /// Blocks in scope, in display order
    pub blocks: Vec<BlockView>,
}

impl RowView {
    /// Iterates over every seat in the row, across blocks.
    pub fn seats(&self) -> impl Iterator<Item = &SeatView> {
        self.blocks.iter().flat_map(|b| b.seats.iter())
    }

    /// Mutable access to every seat in the row.
    pub fn seats_mut(&mut self) -> impl Iterator<Item = &mut SeatView> {
        self.blocks.iter_mut().flat_map(|b| b.seats.iter_mut())
    }
}

/// Result of a batch [`SeatRegistry::mark_occupied`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkOutcome {
    /// Seats that are now occupied
    pub applied: Vec<SeatId>,
    /// Identifiers that are not part of the layout
    pub unknown: Vec<SeatId>,
}

/// Holds every seat of the theater and which of them are occupied.
#[derive(Debug, Clone)]
pub struct SeatRegistry {
    theater: TheaterLayout,
    occupied: HashSet<SeatId>,
}

impl SeatRegistry {
    /// Creates a registry with every seat available.
    #[must_use]
    pub fn new(theater: TheaterLayout) -> Self {
        Self {
            theater,
            occupied: HashSet::new(),
        }
    }

    /// Creates a registry and pre-books a fraction of the house.
    ///
    /// Performs `floor(seat_count * fraction)` independent draws of a row,
    /// a block and a column within that block. A seat drawn twice is simply
    /// occupied once, so the final count can fall short of the fraction.
    pub fn initialize(
        theater: TheaterLayout,
        occupancy_fraction: f64,
        rng: &mut impl RandomSource,
    ) -> Self {
        let mut registry = Self::new(theater);
        let fraction = occupancy_fraction.clamp(0.0, 1.0);
        #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
        let draws = (registry.theater.seat_count() as f64 * fraction).floor() as usize;

        let rows = usize::from(registry.theater.total_rows());
        let columns = registry.theater.columns();
        for _ in 0..draws {
            let row = rng.next_index(rows) as u8 + 1;
            let block = Block::ALL[rng.next_index(Block::ALL.len())];
            let col = rng.next_index(usize::from(columns.get(block))) as u8 + 1;
            registry.occupied.insert(SeatId::new(row, block, col));
        }

        debug!(
            draws,
            occupied = registry.occupied.len(),
            "seeded initial occupancy"
        );
        registry
    }

    /// The immutable theater layout.
    #[must_use]
    pub const fn theater(&self) -> &TheaterLayout {
        &self.theater
    }

    /// Whether a seat id exists in the layout.
    #[must_use]
    pub fn contains(&self, id: &SeatId) -> bool {
        self.theater.contains(id)
    }

    /// Occupancy of a seat; `None` when the id is not part of the layout.
    #[must_use]
    pub fn is_occupied(&self, id: &SeatId) -> Option<bool> {
        if self.contains(id) {
            Some(self.occupied.contains(id))
        } else {
            None
        }
    }

    /// Registry status (Available or Occupied); `None` for unknown ids.
    #[must_use]
    pub fn status(&self, id: &SeatId) -> Option<SeatStatus> {
        self.is_occupied(id).map(|occupied| {
            if occupied {
                SeatStatus::Occupied
            } else {
                SeatStatus::Available
            }
        })
    }

    /// Marks every given seat occupied.
    ///
    /// Unknown ids are logged and skipped; the rest of the batch still applies.
    pub fn mark_occupied(&mut self, ids: &[SeatId]) -> MarkOutcome {
        let mut outcome = MarkOutcome::default();
        for id in ids {
            if self.contains(id) {
                self.occupied.insert(*id);
                outcome.applied.push(*id);
            } else {
                warn!(seat = %id, "cannot mark unknown seat occupied");
                outcome.unknown.push(*id);
            }
        }
        outcome
    }

    /// Projects the seat map for a scope.
    ///
    /// Rows ascend by index; within a row, blocks follow the scope's display
    /// order and seats ascend by column. Never mutates state.
    pub fn layout(&self, scope: ViewScope) -> impl Iterator<Item = RowView> + '_ {
        (1..=self.theater.total_rows()).map(move |row| RowView {
            row,
            label: crate::models::row_label(row).unwrap_or('?'),
            section: self.theater.section_of(row).unwrap_or(0),
            blocks: scope
                .blocks()
                .iter()
                .map(|&block| BlockView {
                    block,
                    seats: self
                        .theater
                        .block_seats(row, block)
                        .map(|id| SeatView {
                            id,
                            status: if self.occupied.contains(&id) {
                                SeatStatus::Occupied
                            } else {
                                SeatStatus::Available
                            },
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    /// Every seat id in layout order.
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.theater.seat_ids()
    }

    /// Total number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.theater.seat_count()
    }

    /// Number of occupied seats.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    /// Number of seats not yet occupied.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.seat_count() - self.occupied_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockColumns, Price};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::VecDeque;

    /// Replays a fixed list of indices.
    struct Scripted(VecDeque<usize>);

    impl RandomSource for Scripted {
        fn next_index(&mut self, bound: usize) -> usize {
            let next = self.0.pop_front().expect("script exhausted");
            assert!(next < bound, "scripted index {next} out of bound {bound}");
            next
        }
    }

    fn theater(sections: Vec<u8>, cols: (u8, u8, u8)) -> TheaterLayout {
        TheaterLayout::new(
            sections,
            BlockColumns::new(cols.0, cols.1, cols.2),
            Price::from_cents(1250),
        )
        .unwrap()
    }

    #[test]
    fn test_initialize_uses_scripted_draws() {
        // 2 rows x (2+2+2) = 12 seats, 25% -> 3 draws
        let mut script = Scripted(VecDeque::from(vec![
            0, 0, 1, // A-left-2
            1, 1, 0, // B-center-1
            0, 2, 1, // A-right-2
        ]));
        let registry = SeatRegistry::initialize(theater(vec![2], (2, 2, 2)), 0.25, &mut script);

        let occupied: Vec<String> = registry
            .seat_ids()
            .filter(|id| registry.is_occupied(id) == Some(true))
            .map(|id| id.to_string())
            .collect();
        assert_eq!(occupied, vec!["A-left-2", "A-right-2", "B-center-1"]);
        assert!(script.0.is_empty());
    }

    #[test]
    fn test_initialize_duplicate_draws_underfill() {
        let mut script = Scripted(VecDeque::from(vec![0, 0, 0, 0, 0, 0, 0, 1, 1]));
        let registry = SeatRegistry::initialize(theater(vec![2], (2, 2, 2)), 0.25, &mut script);
        assert_eq!(registry.occupied_count(), 2);
    }

    #[test]
    fn test_initialize_with_seeded_rng_is_deterministic() {
        let a = SeatRegistry::initialize(
            TheaterLayout::default(),
            0.15,
            &mut ChaCha8Rng::seed_from_u64(7),
        );
        let b = SeatRegistry::initialize(
            TheaterLayout::default(),
            0.15,
            &mut ChaCha8Rng::seed_from_u64(7),
        );
        let occupied_a: Vec<SeatId> = a
            .seat_ids()
            .filter(|id| a.is_occupied(id) == Some(true))
            .collect();
        let occupied_b: Vec<SeatId> = b
            .seat_ids()
            .filter(|id| b.is_occupied(id) == Some(true))
            .collect();
        assert_eq!(occupied_a, occupied_b);
        // 270 seats * 0.15 = 40 draws, duplicates may reduce the count
        assert!(a.occupied_count() <= 40);
        assert!(a.occupied_count() > 0);
    }

    #[test]
    fn test_initialize_zero_fraction() {
        let registry = SeatRegistry::initialize(
            TheaterLayout::default(),
            0.0,
            &mut ChaCha8Rng::seed_from_u64(1),
        );
        assert_eq!(registry.occupied_count(), 0);
        assert_eq!(registry.available_count(), registry.seat_count());
    }

    #[test]
    fn test_is_occupied_unknown_seat() {
        let registry = SeatRegistry::new(theater(vec![1], (2, 2, 2)));
        assert_eq!(registry.is_occupied(&SeatId::new(1, Block::Left, 1)), Some(false));
        assert_eq!(registry.is_occupied(&SeatId::new(2, Block::Left, 1)), None);
        assert_eq!(registry.is_occupied(&SeatId::new(1, Block::Left, 3)), None);
        assert_eq!(registry.status(&SeatId::new(1, Block::Left, 3)), None);
    }

    #[test]
    fn test_mark_occupied_partial_batch() {
        let mut registry = SeatRegistry::new(theater(vec![1], (2, 2, 2)));
        let good = SeatId::new(1, Block::Center, 2);
        let bad = SeatId::new(9, Block::Center, 2);
        let also_good = SeatId::new(1, Block::Right, 1);

        let outcome = registry.mark_occupied(&[good, bad, also_good]);

        assert_eq!(outcome.applied, vec![good, also_good]);
        assert_eq!(outcome.unknown, vec![bad]);
        assert_eq!(registry.status(&good), Some(SeatStatus::Occupied));
        assert_eq!(registry.status(&also_good), Some(SeatStatus::Occupied));
        assert_eq!(registry.occupied_count(), 2);
    }

    #[test]
    fn test_mark_occupied_is_idempotent() {
        let mut registry = SeatRegistry::new(theater(vec![1], (2, 2, 2)));
        let id = SeatId::new(1, Block::Left, 1);
        registry.mark_occupied(&[id]);
        registry.mark_occupied(&[id]);
        assert_eq!(registry.occupied_count(), 1);
    }

    #[test]
    fn test_layout_all_order() {
        let registry = SeatRegistry::new(theater(vec![1, 1], (2, 1, 2)));
        let rows: Vec<RowView> = registry.layout(ViewScope::All).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, 'A');
        assert_eq!(rows[0].section, 0);
        assert_eq!(rows[1].label, 'B');
        assert_eq!(rows[1].section, 1);

        let ids: Vec<String> = rows[0].seats().map(|s| s.id.to_string()).collect();
        assert_eq!(
            ids,
            vec!["A-left-1", "A-left-2", "A-center-1", "A-right-1", "A-right-2"]
        );
    }

    #[test]
    fn test_layout_single_sector() {
        let registry = SeatRegistry::new(theater(vec![2], (2, 3, 2)));
        let rows: Vec<RowView> = registry.layout(ViewScope::Sector(Block::Center)).collect();

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.blocks.len(), 1);
            assert_eq!(row.blocks[0].block, Block::Center);
            assert_eq!(row.blocks[0].seats.len(), 3);
        }
    }

    #[test]
    fn test_layout_reports_occupied_status() {
        let mut registry = SeatRegistry::new(theater(vec![1], (2, 2, 2)));
        let id = SeatId::new(1, Block::Right, 2);
        registry.mark_occupied(&[id]);

        let row = registry.layout(ViewScope::All).next().unwrap();
        for seat in row.seats() {
            let expected = if seat.id == id {
                SeatStatus::Occupied
            } else {
                SeatStatus::Available
            };
            assert_eq!(seat.status, expected);
        }
    }

    #[test]
    fn test_every_projected_id_is_accepted() {
        let mut registry = SeatRegistry::initialize(
            TheaterLayout::default(),
            0.15,
            &mut ChaCha8Rng::seed_from_u64(3),
        );
        let ids: Vec<SeatId> = registry
            .layout(ViewScope::All)
            .flat_map(|row| row.seats().map(|s| s.id).collect::<Vec<_>>())
            .collect();

        assert_eq!(ids.len(), registry.seat_count());
        for id in &ids {
            assert!(registry.is_occupied(id).is_some());
            let reparsed: SeatId = id.to_string().parse().unwrap();
            assert_eq!(&reparsed, id);
        }

        let outcome = registry.mark_occupied(&ids);
        assert!(outcome.unknown.is_empty());
        assert_eq!(registry.available_count(), 0);
    }
}
