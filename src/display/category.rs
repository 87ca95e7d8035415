//! Category display formatting

use crate::models::Category;

/// Format the fixed category list with the short names accepted on input
pub fn format_category_list() -> String {
    let width = Category::ALL
        .iter()
        .map(|c| c.label().chars().count())
        .max()
        .unwrap_or(8);

    let mut output = String::new();
    output.push_str(&format!("{:<width$}  {}\n", "Category", "Short name", width = width));
    output.push_str(&"─".repeat(width + 2 + 14));
    output.push('\n');

    for category in Category::ALL {
        output.push_str(&format!(
            "{:<width$}  {}\n",
            category.label(),
            category.keyword(),
            width = width
        ));
    }

    output
}
