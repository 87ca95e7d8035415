//! Summary formatting for terminal output

use crate::config::settings::Settings;
use crate::reports::SpendingSummary;

const BAR_WIDTH: usize = 20;

/// Format the spending summary with one bar per category
pub fn format_summary(summary: &SpendingSummary, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();

    let mut output = String::new();
    output.push_str(&format!(
        "Total Spent: {}\n",
        summary.total.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Expenses:    {}\n", summary.expense_count));

    if summary.is_empty() {
        output.push_str("\nNo expenses recorded yet.\n");
        return output;
    }

    output.push('\n');
    output.push_str(&format!(
        "{:<18} {:>14} {:>6} {:>7}  {}\n",
        "Category", "Amount", "Count", "Share", ""
    ));
    output.push_str(&separator(18 + 14 + 6 + 7 + BAR_WIDTH + 5));
    output.push('\n');

    for row in &summary.categories {
        output.push_str(&format!(
            "{:<18} {:>14} {:>6} {:>7}  {}\n",
            row.category.label(),
            row.amount.format_with_symbol(symbol),
            row.count,
            format_percentage(row.percentage),
            format_bar(row.percentage, 100.0, BAR_WIDTH)
        ));
    }

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
