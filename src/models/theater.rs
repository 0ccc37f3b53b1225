//! Static theater layout: sections, block widths and seat price.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::price::Price;
use crate::models::seat::{Block, SeatId, MAX_ROWS};

/// Column counts for the three seat blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockColumns {
    /// Seats per row in the left block
    pub left: u8,
    /// Seats per row in the center block
    pub center: u8,
    /// Seats per row in the right block
    pub right: u8,
}

impl BlockColumns {
    /// Creates column counts for left, center and right blocks.
    #[must_use]
    pub const fn new(left: u8, center: u8, right: u8) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Column count of a single block.
    #[must_use]
    pub const fn get(&self, block: Block) -> u8 {
        match block {
            Block::Left => self.left,
            Block::Center => self.center,
            Block::Right => self.right,
        }
    }

    /// Seats in one full row across all blocks.
    #[must_use]
    pub fn per_row(&self) -> usize {
        usize::from(self.left) + usize::from(self.center) + usize::from(self.right)
    }
}

impl Default for BlockColumns {
    fn default() -> Self {
        Self::new(4, 10, 4)
    }
}

/// Immutable theater layout.
///
/// # Validation
///
/// - At least one section, every section has at least one row
/// - Total rows across sections is at most 26 (single-letter labels)
/// - Every block has at least one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TheaterLayout {
    sections: Vec<u8>,
    columns: BlockColumns,
    seat_price: Price,
}

impl TheaterLayout {
    /// Creates a validated layout.
    pub fn new(sections: Vec<u8>, columns: BlockColumns, seat_price: Price) -> Result<Self> {
        if sections.is_empty() {
            anyhow::bail!("Theater layout needs at least one section");
        }

        if let Some(idx) = sections.iter().position(|rows| *rows == 0) {
            anyhow::bail!("Section {} has no rows", idx + 1);
        }

        let total: usize = sections.iter().map(|r| usize::from(*r)).sum();
        if total > usize::from(MAX_ROWS) {
            anyhow::bail!(
                "Theater layout has {} rows but row labels only go up to {} (A-Z)",
                total,
                MAX_ROWS
            );
        }

        for block in Block::ALL {
            if columns.get(block) == 0 {
                anyhow::bail!("Block '{}' has no columns", block);
            }
        }

        Ok(Self {
            sections,
            columns,
            seat_price,
        })
    }

    /// Rows per section, front to back.
    #[must_use]
    pub fn sections(&self) -> &[u8] {
        &self.sections
    }

    /// Column counts per block.
    #[must_use]
    pub const fn columns(&self) -> BlockColumns {
        self.columns
    }

    /// Price of a single seat.
    #[must_use]
    pub const fn seat_price(&self) -> Price {
        self.seat_price
    }

    /// Total number of rows (sum of section rows).
    #[must_use]
    pub fn total_rows(&self) -> u8 {
        self.sections.iter().sum()
    }

    /// Total number of seats in the theater.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        usize::from(self.total_rows()) * self.columns.per_row()
    }

    /// 0-based section index that contains a 1-based row.
    #[must_use]
    pub fn section_of(&self, row: u8) -> Option<usize> {
        if row == 0 {
            return None;
        }
        let mut last_row = 0u8;
        for (idx, rows) in self.sections.iter().enumerate() {
            last_row += rows;
            if row <= last_row {
                return Some(idx);
            }
        }
        None
    }

    /// Whether a seat id addresses a seat that exists in this layout.
    #[must_use]
    pub fn contains(&self, id: &SeatId) -> bool {
        (1..=self.total_rows()).contains(&id.row)
            && (1..=self.columns.get(id.block)).contains(&id.col)
    }

    /// All seat ids in one row of one block, ascending by column.
    pub fn block_seats(&self, row: u8, block: Block) -> impl Iterator<Item = SeatId> {
        (1..=self.columns.get(block)).map(move |col| SeatId::new(row, block, col))
    }

    /// Every seat id in layout order (rows, then blocks left → right, then columns).
    pub fn seat_ids(&self) -> impl Iterator<Item = SeatId> + '_ {
        (1..=self.total_rows())
            .flat_map(move |row| Block::ALL.into_iter().flat_map(move |b| self.block_seats(row, b)))
    }
}

impl Default for TheaterLayout {
    fn default() -> Self {
        Self {
            sections: vec![4, 4, 7],
            columns: BlockColumns::default(),
            seat_price: Price::from_cents(1250),
        }
    }
}
