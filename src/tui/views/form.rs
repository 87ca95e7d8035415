//! Expense entry form
//!
//! Always visible above the expense table. Tab moves between fields, the
//! category field cycles through the fixed categories with arrow keys, and
//! Enter submits. Rejected input stays in the form.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::services::ExpenseDraft;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Date,
    Category,
    Description,
    Amount,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Date => Self::Category,
            Self::Category => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Category => Self::Date,
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
        }
    }
}

/// State of the entry form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: FormField,
    pub date_input: TextInput,
    /// Index into [`Category::ALL`]; `None` until a category is picked
    pub category: Option<usize>,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    /// Last validation or storage error
    pub error_message: Option<String>,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseFormState {
    /// Empty form dated today
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            focused_field: FormField::Date,
            date_input: TextInput::new()
                .label("Date")
                .placeholder("YYYY-MM-DD (today)")
                .content(today.format("%Y-%m-%d").to_string()),
            category: None,
            description_input: TextInput::new()
                .label("Description")
                .placeholder("Enter expense description"),
            amount_input: TextInput::new().label("Amount").placeholder("0.00"),
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Pick the next (or previous) category, wrapping around
    pub fn cycle_category(&mut self, forward: bool) {
        let len = Category::ALL.len();
        self.category = Some(match (self.category, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.category.map(|i| Category::ALL[i])
    }

    /// The text input that receives typed characters, if any
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Date => Some(&mut self.date_input),
            FormField::Category => None,
            FormField::Description => Some(&mut self.description_input),
            FormField::Amount => Some(&mut self.amount_input),
        }
    }

    /// Raw input for validation
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            date: self.date_input.value().to_string(),
            category: self.selected_category().map(|c| c.label().to_string()),
            description: self.description_input.value().to_string(),
            amount: self.amount_input.value().to_string(),
        }
    }

    /// Clear everything but the date after a successful add
    pub fn reset_after_submit(&mut self) {
        self.category = None;
        self.description_input.clear();
        self.amount_input.clear();
        self.error_message = None;
        self.focused_field = FormField::Category;
    }
}

/// Render the form
pub fn render<S: KeyValueStore + Clone>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let palette = app.palette();
    let form = &app.form;
    let is_focused = app.focused_panel == FocusedPanel::Form;

    let block = Block::default()
        .title(" Add New Expense ")
        .title_style(palette.title_style())
        .borders(Borders::ALL)
        .border_style(palette.border_style(is_focused))
        .style(palette.base());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Date
            Constraint::Length(1), // Category
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error or hints
        ])
        .split(inner);

    let field_focused = |field: FormField| is_focused && form.focused_field == field;
    let with_focus = |input: &TextInput, field: FormField| {
        let mut input = input.clone().palette(&palette);
        input.focused = field_focused(field);
        input
    };

    frame.render_widget(with_focus(&form.date_input, FormField::Date), rows[0]);

    let category_text = match form.selected_category() {
        Some(category) => format!("◀ {} ▶", category.label()),
        None => "◀ Select category ▶".to_string(),
    };
    let category_style = if field_focused(FormField::Category) {
        Style::default()
            .fg(palette.background)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else if form.category.is_none() {
        Style::default().fg(palette.muted)
    } else {
        Style::default().fg(palette.foreground)
    };
    let category_line = Line::from(vec![
        Span::styled("Category", Style::default().fg(palette.accent)),
        Span::raw(": "),
        Span::styled(category_text, category_style),
    ]);
    frame.render_widget(Paragraph::new(category_line), rows[1]);

    frame.render_widget(
        with_focus(&form.description_input, FormField::Description),
        rows[2],
    );
    frame.render_widget(with_focus(&form.amount_input, FormField::Amount), rows[3]);

    let footer = match &form.error_message {
        Some(message) => Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(palette.danger),
        )),
        None if is_focused => Line::from(Span::styled(
            "Tab:Next field  ←/→:Category  Enter:Add  Esc:Table",
            Style::default().fg(palette.muted),
        )),
        None => Line::from(Span::styled(
            "a:Add expense",
            Style::default().fg(palette.muted),
        )),
    };
    frame.render_widget(Paragraph::new(footer), rows[5]);
}
