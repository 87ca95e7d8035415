//! Status bar view
//!
//! Shows the expense count, the active theme and key hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::storage::KeyValueStore;
use crate::tui::app::{App, FocusedPanel};

/// Render the status bar
pub fn render<S: KeyValueStore + Clone>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.palette();

    let left = format!(
        " {} expense(s) │ {} theme ",
        app.summary.expense_count, app.theme
    );

    let hints = match app.focused_panel {
        FocusedPanel::Form => " Enter:Add  Esc:Table  Ctrl+c:Quit ",
        FocusedPanel::Table => " a:Add  d:Delete  f/F:Filter  t:Theme  ?:Help  q:Quit ",
    };

    let used = left.chars().count() + hints.chars().count();
    let padding = " ".repeat((area.width as usize).saturating_sub(used).max(1));

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(palette.accent)),
        Span::raw(padding),
        Span::styled(hints, Style::default().fg(palette.muted)),
    ]);

    frame.render_widget(Paragraph::new(line).style(palette.base()), area);
}
