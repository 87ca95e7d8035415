//! Core data models for the expense tracker
//!
//! This module contains the data structures of the domain: expenses, their
//! categories and amounts, and the persisted display preference.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod preferences;

pub use category::{Category, CategoryFilter, CategoryParseError};
pub use expense::{Expense, ExpenseValidationError, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use preferences::Theme;
