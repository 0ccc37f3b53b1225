//! Plain-text rendering of seat map snapshots for the headless commands.

use std::fmt::Write as _;

use crate::booking::SeatMapSnapshot;
use crate::models::SeatStatus;
use crate::registry::BlockView;

/// Gap printed between blocks in the full-house view.
const AISLE: &str = "   ";

fn block_cells(block: &BlockView) -> String {
    block
        .seats
        .iter()
        .map(|seat| seat.status.glyph().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the rows of a snapshot.
///
/// Blocks are separated by aisles and sections by dashed dividers, but only
/// when the snapshot covers every sector.
#[must_use]
pub fn render_seat_map(snapshot: &SeatMapSnapshot) -> String {
    let mut out = String::new();
    let full_house = snapshot.scope.shows_dividers();

    let Some(first) = snapshot.rows.first() else {
        return out;
    };

    // Header with block titles padded to the block widths
    let widths: Vec<usize> = first
        .blocks
        .iter()
        .map(|b| (b.seats.len() * 2).saturating_sub(1))
        .collect();
    let titles: Vec<String> = first
        .blocks
        .iter()
        .zip(&widths)
        .map(|(b, &w)| format!("{:^w$}", b.block.title()))
        .collect();
    let _ = writeln!(out, "   {}", titles.join(AISLE).trim_end());

    let row_width = widths.iter().sum::<usize>() + AISLE.len() * widths.len().saturating_sub(1);
    let mut previous_section = first.section;

    for row in &snapshot.rows {
        if full_house && row.section != previous_section {
            let _ = writeln!(out, "   {}", "-".repeat(row_width));
        }
        previous_section = row.section;

        let separator = if full_house { AISLE } else { " " };
        let cells: Vec<String> = row.blocks.iter().map(block_cells).collect();
        let _ = writeln!(out, "{:<2} {}", row.label, cells.join(separator));
    }

    out
}

/// Renders the selection summary shown under the map.
#[must_use]
pub fn render_summary(snapshot: &SeatMapSnapshot, currency: &str) -> String {
    let seats = if snapshot.selected.is_empty() {
        "No seats selected".to_string()
    } else {
        let labels: Vec<String> = snapshot.selected.iter().map(ToString::to_string).collect();
        format!("Selected: {}", labels.join(", "))
    };
    format!("{seats}\nTotal: {}", snapshot.total.with_symbol(currency))
}

/// Legend line explaining the glyphs.
#[must_use]
pub fn legend() -> String {
    format!(
        "{} available   {} selected   {} occupied",
        SeatStatus::Available.glyph(),
        SeatStatus::Selected.glyph(),
        SeatStatus::Occupied.glyph()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::SelectionController;
    use crate::models::{Block, BlockColumns, Price, TheaterLayout, ViewScope};
    use crate::registry::SeatRegistry;

    fn controller() -> SelectionController {
        let theater =
            TheaterLayout::new(vec![1, 1], BlockColumns::new(2, 3, 2), Price::from_cents(1250))
                .unwrap();
        SelectionController::new(SeatRegistry::new(theater))
    }

    #[test]
    fn test_full_house_has_divider_and_aisles() {
        let mut ctl = controller();
        ctl.toggle(&"A-center-2".parse().unwrap());
        let text = render_seat_map(&ctl.snapshot());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Left"));
        assert!(lines[0].contains("Right"));
        assert_eq!(lines[1], "A  o o   o * o   o o");
        assert!(lines[2].trim().chars().all(|c| c == '-'));
        assert_eq!(lines[3], "B  o o   o o o   o o");
    }

    #[test]
    fn test_single_sector_has_no_divider() {
        let mut ctl = controller();
        ctl.show_sector(Block::Right);
        let text = render_seat_map(&ctl.snapshot());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Right"));
        assert_eq!(lines[1], "A  o o");
        assert_eq!(lines[2], "B  o o");
        assert!(!text.contains('-'));
    }

    #[test]
    fn test_summary_empty_and_selected() {
        let mut ctl = controller();
        assert_eq!(
            render_summary(&ctl.snapshot_for(ViewScope::All), "$"),
            "No seats selected\nTotal: $0.00"
        );

        ctl.toggle(&"B-left-1".parse().unwrap());
        ctl.toggle(&"A-right-2".parse().unwrap());
        assert_eq!(
            render_summary(&ctl.snapshot(), "$"),
            "Selected: A-right-2, B-left-1\nTotal: $25.00"
        );
    }
}
