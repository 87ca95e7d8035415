//! Expense categories
//!
//! The category set is closed: every expense belongs to exactly one of the
//! ten values below. Categories are stored by their display label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining")]
    FoodDining,
    #[serde(rename = "Transportation")]
    Transportation,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Bills & Utilities")]
    BillsUtilities,
    #[serde(rename = "Healthcare")]
    Healthcare,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Travel")]
    Travel,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 10] = [
        Category::FoodDining,
        Category::Transportation,
        Category::Shopping,
        Category::Entertainment,
        Category::BillsUtilities,
        Category::Healthcare,
        Category::Education,
        Category::Travel,
        Category::PersonalCare,
        Category::Other,
    ];

    /// The human-readable label, also used as the stored value
    pub fn label(&self) -> &'static str {
        match self {
            Self::FoodDining => "Food & Dining",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::BillsUtilities => "Bills & Utilities",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Travel => "Travel",
            Self::PersonalCare => "Personal Care",
            Self::Other => "Other",
        }
    }

    /// Short keyword accepted on the command line (first word of the label)
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::FoodDining => "food",
            Self::Transportation => "transportation",
            Self::Shopping => "shopping",
            Self::Entertainment => "entertainment",
            Self::BillsUtilities => "bills",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Travel => "travel",
            Self::PersonalCare => "personal",
            Self::Other => "other",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }
}

/// Lowercase and drop everything that is not a letter or digit
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        if wanted.is_empty() {
            return Err(CategoryParseError(s.to_string()));
        }

        Category::ALL
            .iter()
            .copied()
            .find(|c| normalize(c.label()) == wanted || c.keyword() == wanted)
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Error returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: '{}'", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

/// Category filter for the expense list: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a category passes this filter
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }

    /// Cycle forward: All, then each category in order, then back to All
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Only(Category::ALL[0]),
            Self::Only(c) => match Category::ALL.get(c.index() + 1) {
                Some(next) => Self::Only(*next),
                None => Self::All,
            },
        }
    }

    /// Cycle backward through the same sequence as [`CategoryFilter::next`]
    pub fn previous(&self) -> Self {
        match self {
            Self::All => Self::Only(Category::ALL[Category::ALL.len() - 1]),
            Self::Only(c) if c.index() == 0 => Self::All,
            Self::Only(c) => Self::Only(Category::ALL[c.index() - 1]),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All Categories"),
            Self::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_categories() {
        assert_eq!(Category::ALL.len(), 10);
        for (i, c) in Category::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_parse_label_and_keyword() {
        assert_eq!("Food & Dining".parse::<Category>().unwrap(), Category::FoodDining);
        assert_eq!("food-dining".parse::<Category>().unwrap(), Category::FoodDining);
        assert_eq!("food".parse::<Category>().unwrap(), Category::FoodDining);
        assert_eq!("BILLS".parse::<Category>().unwrap(), Category::BillsUtilities);
        assert_eq!(
            "personal care".parse::<Category>().unwrap(),
            Category::PersonalCare
        );
        assert_eq!("Other".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn test_parse_unknown() {
        assert!("groceries".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
        assert!(" & ".parse::<Category>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        for c in Category::ALL {
            assert_eq!(c.label().parse::<Category>().unwrap(), c);
            assert_eq!(c.keyword().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_serialized_as_label() {
        let json = serde_json::to_string(&Category::BillsUtilities).unwrap();
        assert_eq!(json, "\"Bills & Utilities\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::BillsUtilities);
        assert!(serde_json::from_str::<Category>("\"Groceries\"").is_err());
    }

    #[test]
    fn test_filter_parse_and_match() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("ALL".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        let travel: CategoryFilter = "travel".parse().unwrap();
        assert!(travel.matches(Category::Travel));
        assert!(!travel.matches(Category::Other));
        assert!(CategoryFilter::All.matches(Category::Other));
    }

    #[test]
    fn test_filter_cycles() {
        let mut filter = CategoryFilter::All;
        for _ in 0..11 {
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);

        assert_eq!(
            CategoryFilter::All.previous(),
            CategoryFilter::Only(Category::Other)
        );
        assert_eq!(
            CategoryFilter::Only(Category::FoodDining).previous(),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::Only(Category::Shopping).next().previous(),
            CategoryFilter::Only(Category::Shopping)
        );
    }
}
