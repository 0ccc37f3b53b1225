//! Seat identity and status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Highest row index that still has a single-letter label ('Z').
pub const MAX_ROWS: u8 = 26;

/// A contiguous group of seats sharing a row.
///
/// The declaration order is the on-screen order (left → center → right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    /// Left block, next to the left wall
    Left,
    /// Center block, between the two aisles
    Center,
    /// Right block, next to the right wall
    Right,
}

impl Block {
    /// All blocks in display order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Lowercase name used in seat identifiers.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Human-readable sector title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Block {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(SeatIdError::UnknownBlock(s.to_string())),
        }
    }
}

/// Errors produced when parsing a seat identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatIdError {
    /// Identifier does not have the `<row>-<block>-<column>` shape
    #[error("malformed seat id '{0}' (expected e.g. C-center-5)")]
    Malformed(String),
    /// Row part is not a single letter A-Z
    #[error("invalid row label '{0}'")]
    InvalidRow(String),
    /// Block part is not left, center or right
    #[error("unknown block '{0}'")]
    UnknownBlock(String),
    /// Column part is not a positive number
    #[error("invalid column '{0}'")]
    InvalidColumn(String),
}

/// Converts a 1-based row index into its letter label (1 → 'A').
///
/// Returns `None` for 0 and for indices past 'Z'.
#[must_use]
pub fn row_label(row: u8) -> Option<char> {
    if (1..=MAX_ROWS).contains(&row) {
        Some(char::from(b'A' + row - 1))
    } else {
        None
    }
}

/// Converts a row label back into its 1-based index ('A' → 1).
#[must_use]
pub fn row_index(label: char) -> Option<u8> {
    let upper = label.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(upper as u8 - b'A' + 1)
    } else {
        None
    }
}

/// Composite seat key: row (1-based), block, column within block (1-based).
///
/// Serialized as `"<RowLabel>-<block>-<column>"`, e.g. `"C-center-5"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId {
    /// 1-based row index (1 = row A)
    pub row: u8,
    /// Block the seat belongs to
    pub block: Block,
    /// 1-based column within the block
    pub col: u8,
}

impl SeatId {
    /// Creates a seat id without checking it against any layout.
    #[must_use]
    pub const fn new(row: u8, block: Block, col: u8) -> Self {
        Self { row, block, col }
    }

    /// Letter label of this seat's row.
    #[must_use]
    pub fn row_label(&self) -> char {
        row_label(self.row).unwrap_or('?')
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.row_label(), self.block, self.col)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut parts = trimmed.split('-');
        let (Some(row), Some(block), Some(col), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(SeatIdError::Malformed(s.to_string()));
        };

        let mut row_chars = row.chars();
        let row = match (row_chars.next(), row_chars.next()) {
            (Some(c), None) => row_index(c).ok_or_else(|| SeatIdError::InvalidRow(row.to_string()))?,
            _ => return Err(SeatIdError::InvalidRow(row.to_string())),
        };

        let block = block.parse::<Block>()?;

        let col = col
            .parse::<u8>()
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| SeatIdError::InvalidColumn(col.to_string()))?;

        Ok(Self { row, block, col })
    }
}

impl Serialize for SeatId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Current state of a single seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to be selected
    Available,
    /// Chosen by the active user, pending booking
    Selected,
    /// Already booked and unavailable
    Occupied,
}

impl SeatStatus {
    /// One-character glyph used by the text renderers.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Available => 'o',
            Self::Selected => '*',
            Self::Occupied => 'x',
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Available => "available",
            Self::Selected => "selected",
            Self::Occupied => "occupied",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_label_bounds() {
        assert_eq!(row_label(1), Some('A'));
        assert_eq!(row_label(15), Some('O'));
        assert_eq!(row_label(26), Some('Z'));
        assert_eq!(row_label(0), None);
        assert_eq!(row_label(27), None);
    }

    #[test]
    fn test_row_index_is_case_insensitive() {
        assert_eq!(row_index('A'), Some(1));
        assert_eq!(row_index('c'), Some(3));
        assert_eq!(row_index('1'), None);
    }

    #[test]
    fn test_seat_id_display() {
        let id = SeatId::new(3, Block::Center, 5);
        assert_eq!(id.to_string(), "C-center-5");
    }

    #[test]
    fn test_seat_id_parse() {
        let id: SeatId = "C-center-5".parse().unwrap();
        assert_eq!(id, SeatId::new(3, Block::Center, 5));

        let id: SeatId = "a-LEFT-12".parse().unwrap();
        assert_eq!(id, SeatId::new(1, Block::Left, 12));
    }

    #[test]
    fn test_seat_id_parse_errors() {
        assert!(matches!(
            "C-center".parse::<SeatId>(),
            Err(SeatIdError::Malformed(_))
        ));
        assert!(matches!(
            "C-center-5-1".parse::<SeatId>(),
            Err(SeatIdError::Malformed(_))
        ));
        assert!(matches!(
            "CC-center-5".parse::<SeatId>(),
            Err(SeatIdError::InvalidRow(_))
        ));
        assert!(matches!(
            "C-balcony-5".parse::<SeatId>(),
            Err(SeatIdError::UnknownBlock(_))
        ));
        assert!(matches!(
            "C-center-0".parse::<SeatId>(),
            Err(SeatIdError::InvalidColumn(_))
        ));
        assert!(matches!(
            "C-center-x".parse::<SeatId>(),
            Err(SeatIdError::InvalidColumn(_))
        ));
    }

    #[test]
    fn test_seat_id_serde_as_string() {
        let id = SeatId::new(1, Block::Right, 2);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"A-right-2\"");

        let back: SeatId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_block_order_is_display_order() {
        let mut blocks = vec![Block::Right, Block::Left, Block::Center];
        blocks.sort();
        assert_eq!(blocks, Block::ALL.to_vec());
    }
}
