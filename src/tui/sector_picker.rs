//! Sector picker shown in place of the seat map on compact terminals.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Block as SeatBlock, SeatStatus, ViewScope};

use super::AppState;

/// Free and total seat counts for one sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorSummary {
    /// Which sector
    pub block: SeatBlock,
    /// Seats that can still be selected
    pub available: usize,
    /// Seats in the sector
    pub total: usize,
}

/// Counts seats per sector from the current controller state.
#[must_use]
pub fn summarize(state: &AppState) -> Vec<SectorSummary> {
    SeatBlock::ALL
        .iter()
        .map(|&block| {
            let snapshot = state.controller.snapshot_for(ViewScope::Sector(block));
            let mut summary = SectorSummary {
                block,
                available: 0,
                total: 0,
            };
            for seat in snapshot.rows.iter().flat_map(|r| r.seats()) {
                summary.total += 1;
                if seat.status == SeatStatus::Available {
                    summary.available += 1;
                }
            }
            summary
        })
        .collect()
}

/// Sector picker widget
pub struct SectorPicker;

impl SectorPicker {
    /// Render the list of sectors with their availability
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Choose a sector",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (idx, summary) in summarize(state).iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("[{}] ", idx + 1),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:<7}", summary.block.title()),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!(" {}/{} available", summary.available, summary.total),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
            lines.push(Line::from(""));
        }

        let widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Sectors ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(widget, area);
    }
}
