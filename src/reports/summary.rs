//! Spending summary
//!
//! Pure aggregation over a slice of expenses: the grand total, per-category
//! totals ordered by amount, and each category's share of the total.

use std::collections::HashMap;

use crate::models::{Category, Expense, Money};

/// Total spending for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    /// Sum of the category's expenses
    pub amount: Money,
    /// Number of expenses in the category
    pub count: usize,
}

/// One row of the summary table
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub amount: Money,
    pub count: usize,
    /// Share of the grand total, 0..=100
    pub percentage: f64,
}

/// Summary of all spending
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    /// Sum of every expense
    pub total: Money,
    /// Number of expenses summarized
    pub expense_count: usize,
    /// Categories with spending, largest first
    pub categories: Vec<CategorySummary>,
}

/// Sum of all amounts; zero for an empty slice
pub fn total_amount(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category totals in descending order of amount
///
/// Categories without expenses are omitted. Equal totals keep the order in
/// which their category first appears in `expenses`.
pub fn by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<Category, usize> = HashMap::new();

    for expense in expenses {
        let index = *positions.entry(expense.category).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: expense.category,
                amount: Money::zero(),
                count: 0,
            });
            totals.len() - 1
        });

        totals[index].amount += expense.amount;
        totals[index].count += 1;
    }

    // Stable sort keeps first-seen order among equal amounts
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

/// `amount` as a percentage of `total`; 0 when the total is zero
pub fn percentage_of_total(amount: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        (amount.cents() as f64 / total.cents() as f64) * 100.0
    }
}

impl SpendingSummary {
    /// Summarize a list of expenses
    pub fn generate(expenses: &[Expense]) -> Self {
        let total = total_amount(expenses);

        let categories = by_category(expenses)
            .into_iter()
            .map(|row| CategorySummary {
                category: row.category,
                amount: row.amount,
                count: row.count,
                percentage: percentage_of_total(row.amount, total),
            })
            .collect();

        Self {
            total,
            expense_count: expenses.len(),
            categories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }

    /// The category with the largest total
    pub fn top_category(&self) -> Option<&CategorySummary> {
        self.categories.first()
    }
}
