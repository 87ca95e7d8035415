//! Help dialog
//!
//! Lists the keyboard shortcuts for both panels

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::theme::Palette;

/// Render the help dialog
pub fn render<S: KeyValueStore + Clone>(frame: &mut Frame, app: &App<S>) {
    let palette = app.palette();
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());

    let paragraph = Paragraph::new(help_lines(&palette))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        heading("Expense Table", palette),
        Line::from(""),
        key_line("j/k", "Move selection down/up", palette),
        key_line("g/G", "Go to top/bottom", palette),
        key_line("d/Del", "Delete selected expense", palette),
        key_line("f/F", "Next/previous category filter", palette),
        key_line("a/Tab", "Go to the entry form", palette),
        key_line("t", "Toggle dark/light theme", palette),
        key_line("q", "Quit", palette),
        Line::from(""),
        heading("Entry Form", palette),
        Line::from(""),
        key_line("Tab", "Next field (Shift+Tab: previous)", palette),
        key_line("←/→", "Change category", palette),
        key_line("Enter", "Add expense", palette),
        key_line("Esc", "Back to the table", palette),
        key_line("Ctrl+c", "Quit from anywhere", palette),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(palette.muted),
        )),
    ]
}

fn heading(text: &'static str, palette: &Palette) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(palette.warning),
    ))
}

/// Create a formatted key line
fn key_line(key: &str, description: &str, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>10}", key), Style::default().fg(palette.accent)),
        Span::raw("  "),
        Span::styled(
            description.to_string(),
            Style::default().fg(palette.foreground),
        ),
    ])
}
