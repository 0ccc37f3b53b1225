//! Popup and overlay rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::booking::BookingReceipt;
use crate::shortcuts::HELP_ENTRIES;

use super::Theme;

/// Render the booking confirmation
pub fn render_receipt_popup(
    f: &mut Frame,
    receipt: &BookingReceipt,
    currency: &str,
    venue: &str,
    theme: &Theme,
) {
    let area = centered_rect(60, 50, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = receipt
        .confirmation_message(currency, venue)
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Receipt {}", receipt.id),
        Style::default().fg(theme.text_muted),
    )));

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .title(" Booking Confirmed ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success))
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(popup, area);
}

/// Render the key reference
pub fn render_help_popup(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let lines: Vec<Line> = HELP_ENTRIES
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(
                    format!("{keys:<20}"),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*description, Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let popup = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(popup, area);
}

/// Render error overlay on top of all other UI elements
pub fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    // Clear the background area first
    f.render_widget(Clear, area);

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let message = Paragraph::new(error)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Notice ")
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(message, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]))
    .style(Style::default().fg(theme.text).bg(theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(help, chunks[1]);
}

/// Helper to create a centered rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
