//! View scope: which blocks a layout projection includes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::seat::Block;

/// Either every block or a single sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewScope {
    /// All three blocks, with aisles and section dividers
    #[default]
    All,
    /// A single block
    Sector(Block),
}

impl ViewScope {
    /// Parses a scope request, falling back to `All` for anything unrecognised.
    ///
    /// Accepts `all`, `left`, `center`, `right` (case-insensitive).
    pub fn parse_lenient(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        match trimmed.parse::<Block>() {
            Ok(block) => Self::Sector(block),
            Err(_) => {
                tracing::warn!(scope = raw, "unknown view scope, showing all sectors");
                Self::All
            }
        }
    }

    /// Blocks included in this scope, in display order.
    #[must_use]
    pub fn blocks(self) -> &'static [Block] {
        match self {
            Self::All => &Block::ALL,
            Self::Sector(Block::Left) => &[Block::Left],
            Self::Sector(Block::Center) => &[Block::Center],
            Self::Sector(Block::Right) => &[Block::Right],
        }
    }

    /// Whether section dividers and aisles are drawn for this scope.
    #[must_use]
    pub const fn shows_dividers(self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for ViewScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Sector(block) => write!(f, "{block}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_scopes() {
        assert_eq!(ViewScope::parse_lenient("all"), ViewScope::All);
        assert_eq!(ViewScope::parse_lenient("ALL"), ViewScope::All);
        assert_eq!(ViewScope::parse_lenient("left"), ViewScope::Sector(Block::Left));
        assert_eq!(ViewScope::parse_lenient(" Center "), ViewScope::Sector(Block::Center));
        assert_eq!(ViewScope::parse_lenient("right"), ViewScope::Sector(Block::Right));
    }

    #[test]
    fn test_invalid_scope_falls_back_to_all() {
        assert_eq!(ViewScope::parse_lenient("balcony"), ViewScope::All);
        assert_eq!(ViewScope::parse_lenient(""), ViewScope::All);
    }

    #[test]
    fn test_blocks_in_scope() {
        assert_eq!(ViewScope::All.blocks(), &Block::ALL);
        assert_eq!(ViewScope::Sector(Block::Right).blocks(), &[Block::Right]);
    }
}
