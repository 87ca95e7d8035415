//! Display formatting for terminal output
//!
//! Plain string formatting used by the CLI commands. The TUI renders the
//! same data through ratatui widgets instead.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_table};
pub use summary::format_summary;
