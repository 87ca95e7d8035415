//! Expense display formatting
//!
//! Renders the expense list as a table for the `list` command and a
//! detail block for single expenses.

use std::fmt::Write;

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::settings::Settings;
use crate::models::Expense;

const DESCRIPTION_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, settings: &Settings) -> Self {
        Self {
            id: expense.id.to_string(),
            date: format_date(expense, settings),
            category: expense.category.label(),
            description: truncate(&expense.description, DESCRIPTION_WIDTH),
            amount: expense.amount.format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n\nAdd one with 'expenses add <description> <amount> -c <category>'."
            .to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow::new(e, settings))
        .collect();

    Table::new(rows)
        .with(Style::sharp())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()))
        .to_string()
}

/// Format one expense in detail
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", format_date(expense, settings)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output
}

/// Format the date with the configured pattern, falling back to ISO when
/// the pattern is not a valid strftime string
pub fn format_date(expense: &Expense, settings: &Settings) -> String {
    let mut formatted = String::new();
    match write!(formatted, "{}", expense.date.format(&settings.date_format)) {
        Ok(()) => formatted,
        Err(_) => expense.date.format("%Y-%m-%d").to_string(),
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
