//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the current message and contextual hints
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = if state.status_message.is_empty() {
            Self::seat_line(state, theme)
        } else {
            Line::from(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(vec![status_line, Self::hints_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Seat under the cursor and its status.
    fn seat_line(state: &AppState, theme: &Theme) -> Line<'static> {
        if state.controller.view().shows_sector_picker() {
            return Line::from(Span::styled(
                format!(
                    "{} of {} seats available",
                    state.controller.registry().available_count(),
                    state.controller.registry().seat_count()
                ),
                Style::default().fg(theme.text_muted),
            ));
        }

        let status = state.controller.status(&state.cursor);
        let mut spans = vec![
            Span::styled("Seat ", Style::default().fg(theme.primary)),
            Span::raw(state.cursor.to_string()),
        ];
        if let Some(status) = status {
            spans.push(Span::raw(" ("));
            spans.push(Span::styled(
                status.to_string(),
                Style::default().fg(theme.seat_color(status)),
            ));
            spans.push(Span::raw(")"));
        }
        Line::from(spans)
    }

    /// Key hints for the current context.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = if state.active_popup.is_some() || state.error_message.is_some()
        {
            &[("Enter/Esc", "Dismiss")]
        } else if state.controller.view().shows_sector_picker() {
            &[("1-3", "Sector"), ("b", "Book"), ("?", "Help"), ("q", "Quit")]
        } else {
            &[
                ("Arrows", "Move"),
                ("Space", "Select"),
                ("c", "Clear"),
                ("b", "Book"),
                ("1-3/0", "Sector"),
                ("?", "Help"),
                ("q", "Quit"),
            ]
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(
                (*action).to_string(),
                Style::default().fg(theme.text_muted),
            ));
        }
        Line::from(spans)
    }
}
