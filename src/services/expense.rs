//! Expense service
//!
//! The only path through which the CLI and TUI create or delete expenses:
//! validates drafts, mutates the repository and records the audit entry.

use chrono::Local;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryFilter, Expense, ExpenseId, NewExpense};
use crate::reports::SpendingSummary;
use crate::storage::{KeyValueStore, Storage};

use super::validation::ExpenseDraft;

/// Service for expense management
pub struct ExpenseService<'a, S: KeyValueStore + Clone> {
    storage: &'a mut Storage<S>,
    currency_symbol: String,
}

impl<'a, S: KeyValueStore + Clone> ExpenseService<'a, S> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage<S>) -> Self {
        Self {
            storage,
            currency_symbol: String::new(),
        }
    }

    /// Also accept this symbol in front of typed amounts
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Validate a draft and store the resulting expense
    pub fn add(&mut self, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
        let new = draft
            .validate(Local::now().date_naive(), &self.currency_symbol)
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.create(new)
    }

    /// Store an already validated expense
    ///
    /// Once the expense is persisted the call succeeds; an audit failure is
    /// left on [`Storage::take_audit_warning`].
    pub fn create(&mut self, new: NewExpense) -> ExpenseResult<Expense> {
        let expense = self.storage.expenses.add(new)?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        );

        Ok(expense)
    }

    /// Delete an expense by id
    ///
    /// Returns `Ok(None)` when no expense has that id.
    pub fn remove(&mut self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let Some(removed) = self.storage.expenses.remove(id)? else {
            return Ok(None);
        };

        self.storage.log_delete(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.description.clone()),
            &removed,
        );

        Ok(Some(removed))
    }

    /// Look up an expense by full id, short id or unique prefix
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<Expense>> {
        Ok(self.storage.expenses.find(identifier)?.cloned())
    }

    /// Like [`ExpenseService::find`], but a missing expense is an error
    pub fn get(&self, identifier: &str) -> ExpenseResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| ExpenseError::expense_not_found(identifier))
    }

    /// Expenses matching the filter, newest first
    pub fn list(&self, filter: CategoryFilter) -> Vec<Expense> {
        self.storage
            .expenses
            .list()
            .iter()
            .filter(|e| filter.matches(e.category))
            .cloned()
            .collect()
    }

    /// Summary over every stored expense, regardless of any table filter
    pub fn summary(&self) -> SpendingSummary {
        SpendingSummary::generate(self.storage.expenses.list())
    }
}
