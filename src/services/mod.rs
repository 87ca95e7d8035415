//! Service layer for the expense tracker
//!
//! Services sit between the views and the storage layer: they validate
//! input, apply the change through the repositories and record it in the
//! audit log.

pub mod expense;
pub mod preference;
pub mod validation;

pub use expense::ExpenseService;
pub use preference::PreferenceService;
pub use validation::{ExpenseDraft, ValidationError};
