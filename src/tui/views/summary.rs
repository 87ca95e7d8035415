//! Spending summary panel
//!
//! Total spent and one bar per category, largest first. Always covers
//! every expense regardless of the table filter.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::summary::{format_bar, format_percentage};
use crate::storage::KeyValueStore;
use crate::tui::app::App;

/// Render the summary panel
pub fn render<S: KeyValueStore + Clone>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.palette();
    let summary = &app.summary;
    let symbol = app.settings.currency_symbol.as_str();

    let block = Block::default()
        .title(" Spending Summary ")
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(palette.border_style(false))
        .style(palette.base());

    let bar_width = (area.width as usize).saturating_sub(12).clamp(4, 30);

    let mut lines = vec![
        Line::from(Span::styled(
            "Total Expenses",
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            summary.total.format_with_symbol(symbol),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if summary.is_empty() {
        lines.push(Line::from(Span::styled(
            "No expenses to summarize yet.",
            Style::default().fg(palette.muted),
        )));
    }

    for row in &summary.categories {
        lines.push(Line::from(vec![
            Span::styled(
                row.category.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                row.amount.format_with_symbol(symbol),
                Style::default().fg(palette.foreground),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format_bar(row.percentage, 100.0, bar_width),
                Style::default().fg(palette.accent),
            ),
            Span::raw(" "),
            Span::styled(
                format_percentage(row.percentage),
                Style::default().fg(palette.muted),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
