//! Expense CLI commands
//!
//! Implements `add`, `list`, `show`, `delete`, `summary` and `categories`.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{
    format_category_list, format_expense_details, format_expense_table, format_summary,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::CategoryFilter;
use crate::services::{ExpenseDraft, ExpenseService};
use crate::storage::Storage;

/// Arguments of `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,
    /// Amount spent (e.g. "250", "12.50", "₹1,200")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// Category name or short name (run 'expenses categories')
    #[arg(short, long)]
    pub category: Option<String>,
    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments of `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only show one category ("all" shows everything)
    #[arg(short, long, default_value = "all")]
    pub category: String,
    /// Maximum number of expenses to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Handle `add`
pub fn handle_add_command(
    storage: &mut Storage,
    settings: &Settings,
    args: AddArgs,
) -> ExpenseResult<()> {
    let draft = ExpenseDraft {
        date: args.date.unwrap_or_default(),
        category: args.category,
        description: args.description,
        amount: args.amount,
    };

    let expense = ExpenseService::new(storage)
        .with_currency_symbol(settings.currency_symbol.as_str())
        .add(&draft)?;

    println!("Added expense:");
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

/// Handle `list`
pub fn handle_list_command(
    storage: &mut Storage,
    settings: &Settings,
    args: ListArgs,
) -> ExpenseResult<()> {
    let filter = args
        .category
        .parse::<CategoryFilter>()
        .map_err(|e| ExpenseError::Validation(e.to_string()))?;

    let service = ExpenseService::new(storage);
    let mut expenses = service.list(filter);
    let matching = expenses.len();
    if let Some(limit) = args.limit {
        expenses.truncate(limit);
    }

    println!("{}", format_expense_table(&expenses, settings));
    if expenses.len() < matching {
        println!("Showing {} of {} expenses.", expenses.len(), matching);
    }
    Ok(())
}

/// Handle `show`
pub fn handle_show_command(
    storage: &mut Storage,
    settings: &Settings,
    identifier: &str,
) -> ExpenseResult<()> {
    let expense = ExpenseService::new(storage).get(identifier)?;
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

/// Handle `delete`
///
/// An identifier that matches nothing is reported but is not an error.
pub fn handle_delete_command(storage: &mut Storage, identifier: &str) -> ExpenseResult<()> {
    let mut service = ExpenseService::new(storage);

    // An identifier too short to match anything is handled like an unknown one
    let found = match service.find(identifier) {
        Err(e) if e.is_validation() => None,
        other => other?,
    };
    let Some(expense) = found else {
        println!("No expense matches '{}'. Nothing was deleted.", identifier);
        return Ok(());
    };

    match service.remove(expense.id)? {
        Some(removed) => println!(
            "Deleted expense {}: {} ({})",
            removed.id, removed.description, removed.amount
        ),
        None => println!("No expense matches '{}'. Nothing was deleted.", identifier),
    }
    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command(storage: &mut Storage, settings: &Settings) -> ExpenseResult<()> {
    let summary = ExpenseService::new(storage).summary();
    print!("{}", format_summary(&summary, settings));
    Ok(())
}

/// Handle `categories`
pub fn handle_categories_command() -> ExpenseResult<()> {
    print!("{}", format_category_list());
    Ok(())
}
