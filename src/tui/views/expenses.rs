//! Expense table view
//!
//! Shows the filtered expenses, newest first, with the selected row
//! highlighted when the table has focus.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::expense::{format_date, truncate};
use crate::models::CategoryFilter;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, FocusedPanel};

/// Render the expense table
pub fn render<S: KeyValueStore + Clone>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.palette();
    let is_focused = app.focused_panel == FocusedPanel::Table;

    let title = format!(
        " Expenses: {} ({}) ",
        app.filter,
        app.visible.len()
    );
    let block = Block::default()
        .title(title)
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(palette.border_style(is_focused))
        .style(palette.base());

    if app.visible.is_empty() {
        let hint = match app.filter {
            CategoryFilter::All => "No expenses yet. Add your first expense above.",
            CategoryFilter::Only(_) => "No expenses in this category. Try changing the filter (f/F).",
        };
        let text = Paragraph::new(hint)
            .block(block)
            .style(Style::default().fg(palette.muted));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(14), // Date
        Constraint::Length(18), // Category
        Constraint::Min(12),    // Description
        Constraint::Length(14), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Category").style(bold),
        Cell::from("Description").style(bold),
        Cell::from("Amount").style(bold),
    ])
    .style(Style::default().fg(palette.accent))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(format_date(expense, app.settings)),
                Cell::from(expense.category.label()),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(expense.amount.format_with_symbol(symbol))
                    .style(Style::default().fg(palette.danger)),
            ])
        })
        .collect();

    let highlight = if is_focused {
        Style::default()
            .bg(palette.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
