//! Expense Tracker - terminal-based personal expense tracking
//!
//! Records expenses (date, category, description, amount), lists and
//! filters them, and summarizes spending per category. Data lives in a small
//! key-value store of JSON files; every change rewrites the whole list.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, theme)
//! - `storage`: Key-value store and repositories
//! - `services`: Validation and business logic
//! - `reports`: Spending aggregation
//! - `audit`: Audit logging system
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::open(&paths, &settings)?;
//! storage.load_all();
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::ExpenseError;
