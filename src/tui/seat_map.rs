//! Seat map widget: rows of colored seats with aisles and section dividers.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::booking::SeatMapSnapshot;
use crate::models::{SeatId, ViewScope};
use crate::registry::RowView;

use super::{AppState, Theme};

const AISLE: &str = "   ";

/// Seat map widget
pub struct SeatMapWidget;

impl SeatMapWidget {
    /// Render the seat map for the current scope
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let snapshot = state.controller.snapshot();
        let lines = Self::lines(&snapshot, state.cursor, theme);

        let title = match snapshot.scope {
            ViewScope::All => " Seats | All sectors ".to_string(),
            ViewScope::Sector(block) => format!(" Seats | {} sector ", block.title()),
        };

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(widget, area);
    }

    /// Builds the styled lines for a snapshot.
    fn lines(snapshot: &SeatMapSnapshot, cursor: SeatId, theme: &Theme) -> Vec<Line<'static>> {
        let full_house = snapshot.scope.shows_dividers();
        let Some(first) = snapshot.rows.first() else {
            return Vec::new();
        };

        let widths: Vec<usize> = first
            .blocks
            .iter()
            .map(|b| (b.seats.len() * 2).saturating_sub(1))
            .collect();
        let separator = if full_house { AISLE } else { " " };
        let row_width =
            widths.iter().sum::<usize>() + separator.len() * widths.len().saturating_sub(1);

        let mut lines = Vec::with_capacity(snapshot.rows.len() + 6);
        lines.push(Line::from(Span::styled(
            format!("{:━^row_width$}", " SCREEN "),
            Style::default().fg(theme.text_muted),
        )));
        lines.push(Line::from(""));

        let titles: Vec<String> = first
            .blocks
            .iter()
            .zip(&widths)
            .map(|(b, &w)| format!("{:^w$}", b.block.title()))
            .collect();
        lines.push(Line::from(Span::styled(
            format!("   {}", titles.join(separator)),
            Style::default().fg(theme.primary),
        )));

        let mut previous_section = first.section;
        for row in &snapshot.rows {
            if full_house && row.section != previous_section {
                lines.push(Line::from(Span::styled(
                    format!("   {}", "-".repeat(row_width)),
                    Style::default().fg(theme.text_muted),
                )));
            }
            previous_section = row.section;
            lines.push(Self::row_line(row, cursor, separator, theme));
        }

        lines
    }

    fn row_line(row: &RowView, cursor: SeatId, separator: &'static str, theme: &Theme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            format!("{:<3}", row.label),
            Style::default().fg(theme.text_muted),
        )];

        for (block_idx, block) in row.blocks.iter().enumerate() {
            if block_idx > 0 {
                spans.push(Span::raw(separator));
            }
            for (seat_idx, seat) in block.seats.iter().enumerate() {
                if seat_idx > 0 {
                    spans.push(Span::raw(" "));
                }
                let mut style = Style::default().fg(theme.seat_color(seat.status));
                if seat.id == cursor {
                    style = style
                        .bg(theme.highlight_bg)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                spans.push(Span::styled(seat.status.glyph().to_string(), style));
            }
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::SelectionController;
    use crate::models::{Block, BlockColumns, Price, TheaterLayout};
    use crate::registry::SeatRegistry;

    fn controller() -> SelectionController {
        let theater =
            TheaterLayout::new(vec![1, 1], BlockColumns::new(2, 2, 2), Price::from_cents(1250))
                .unwrap();
        SelectionController::new(SeatRegistry::new(theater))
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_full_house() {
        let mut ctl = controller();
        ctl.toggle(&"B-right-1".parse().unwrap());
        let cursor = "A-left-1".parse().unwrap();
        let lines = SeatMapWidget::lines(&ctl.snapshot(), cursor, &Theme::dark());

        // screen, blank, header, row A, divider, row B
        assert_eq!(lines.len(), 6);
        assert!(text(&lines[0]).contains("SCREEN"));
        assert_eq!(text(&lines[3]), "A  o o   o o   o o");
        assert!(text(&lines[4]).trim().chars().all(|c| c == '-'));
        assert_eq!(text(&lines[5]), "B  o o   o o   * o");
    }

    #[test]
    fn test_lines_single_sector() {
        let mut ctl = controller();
        ctl.show_sector(Block::Center);
        let cursor = "A-center-1".parse().unwrap();
        let lines = SeatMapWidget::lines(&ctl.snapshot(), cursor, &Theme::dark());

        assert_eq!(lines.len(), 5);
        assert_eq!(text(&lines[3]), "A  o o");
        assert_eq!(text(&lines[4]), "B  o o");
    }

    #[test]
    fn test_cursor_seat_is_highlighted() {
        let ctl = controller();
        let cursor: SeatId = "A-center-2".parse().unwrap();
        let lines = SeatMapWidget::lines(&ctl.snapshot(), cursor, &Theme::dark());

        let highlighted: Vec<usize> = lines[3]
            .spans
            .iter()
            .enumerate()
            .filter(|(_, s)| s.style.add_modifier.contains(Modifier::REVERSED))
            .map(|(i, _)| i)
            .collect();
        // label, L1, " ", L2, aisle, C1, " ", C2
        assert_eq!(highlighted, vec![7]);
    }
}
