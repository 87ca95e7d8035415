//! Reports for the expense tracker
//!
//! Aggregations are recomputed from the full expense list whenever it
//! changes; nothing here is cached or persisted.

pub mod summary;

pub use summary::{
    by_category, percentage_of_total, total_amount, CategorySummary, CategoryTotal,
    SpendingSummary,
};
