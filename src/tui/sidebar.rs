//! Selection sidebar: chosen seats, running total and legend.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::SeatStatus;

use super::{AppState, Theme};

/// Sidebar widget
pub struct Sidebar;

impl Sidebar {
    /// Render the selection summary and legend
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(5)])
            .split(area);

        let summary = Paragraph::new(Self::summary_lines(state))
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Your Selection ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(summary, chunks[0]);

        let legend = Paragraph::new(Self::legend_lines(theme))
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Legend ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(legend, chunks[1]);
    }

    /// Seat list followed by the total.
    fn summary_lines(state: &AppState) -> Vec<Line<'static>> {
        let theme = &state.theme;
        let currency = &state.config.theater.currency;
        let selected = state.controller.selected();

        let mut lines = Vec::new();
        if selected.is_empty() {
            lines.push(Line::from(Span::styled(
                "No seats selected",
                Style::default().fg(theme.text_muted),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                format!("{} seat(s):", selected.len()),
                Style::default().fg(theme.text_muted),
            )));
            lines.push(Line::from(
                selected
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("Price: "),
            Span::raw(state.controller.seat_price().with_symbol(currency)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("Total: {}", state.controller.total().with_symbol(currency)),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        lines
    }

    fn legend_lines(theme: &Theme) -> Vec<Line<'static>> {
        [SeatStatus::Available, SeatStatus::Selected, SeatStatus::Occupied]
            .into_iter()
            .map(|status| {
                Line::from(vec![
                    Span::styled(
                        status.glyph().to_string(),
                        Style::default().fg(theme.seat_color(status)),
                    ),
                    Span::raw(format!(" {status}")),
                ])
            })
            .collect()
    }
}
