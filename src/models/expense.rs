//! Expense model
//!
//! An expense is one recorded spending event. Records are immutable once
//! created: the only lifecycle operations are add and delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A validated expense that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub category: Category,
    pub description: String,
    pub amount: Money,
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Calendar date of the expense
    #[serde(with = "iso_date")]
    pub date: NaiveDate,

    /// Spending category
    pub category: Category,

    /// Trimmed, non-empty description
    pub description: String,

    /// Positive amount
    pub amount: Money,
}

impl Expense {
    /// Create a stored expense from a validated candidate, assigning a fresh id
    pub fn create(new: NewExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            date: new.date,
            category: new.category,
            description: new.description,
            amount: new.amount,
        }
    }

    /// Check the record invariants (used when loading stored data)
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::BlankDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > Money::MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}

/// Invariant violations of a stored expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    BlankDescription,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankDescription => write!(f, "Expense description is blank"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Expense amount {} exceeds {}", amount, Money::MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Serde adapter for calendar dates.
///
/// Writes `YYYY-MM-DD`. Reads either that form or a full ISO-8601 timestamp
/// such as `2025-01-10T18:30:00.000Z`; timestamps with an offset are
/// converted to local time before the day is taken.
pub mod iso_date {
    use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid date: '{}'", raw)))
    }

    /// Parse a stored date in any of the accepted forms
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            return Some(date);
        }

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Some(timestamp.with_timezone(&Local).date_naive());
        }

        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local};
    use serde_json::json;

    fn lunch() -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            category: Category::FoodDining,
            description: "Lunch".into(),
            amount: Money::from_cents(25000),
        }
    }

    #[test]
    fn test_create_copies_fields() {
        let expense = Expense::create(lunch());
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
        assert_eq!(expense.category, Category::FoodDining);
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.amount.cents(), 25000);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        let a = Expense::create(lunch());
        let b = Expense::create(lunch());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_validate_rejects_broken_records() {
        let mut expense = Expense::create(lunch());
        expense.description = "   ".into();
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::BlankDescription)
        );

        let mut expense = Expense::create(lunch());
        expense.amount = Money::zero();
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(_))
        ));

        let mut expense = Expense::create(lunch());
        expense.amount = Money::from_cents(Money::MAX_AMOUNT.cents() + 1);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_stored_shape() {
        let expense = Expense::create(lunch());
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["date"], json!("2025-01-10"));
        assert_eq!(value["category"], json!("Food & Dining"));
        assert_eq!(value["description"], json!("Lunch"));
        assert_eq!(value["amount"], json!(250.0));
        assert_eq!(value["id"], json!(expense.id.as_uuid().to_string()));
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let expense = Expense::create(lunch());
        let json = serde_json::to_string(&expense).unwrap();
        let back: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_reads_timestamp_dates() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "date": "2025-01-10T12:00:00.000Z",
            "category": "Travel",
            "description": "Train",
            "amount": 99.5
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        let expected = DateTime::parse_from_rfc3339("2025-01-10T12:00:00.000Z")
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(expense.date, expected);
        assert_eq!(expense.amount.cents(), 9950);
    }

    #[test]
    fn test_offset_timestamp_uses_local_day() {
        let raw = "2025-01-10T23:30:00-05:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .date_naive();
        assert_eq!(iso_date::parse(raw), Some(expected));
    }

    #[test]
    fn test_iso_date_parse_forms() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(iso_date::parse("2025-03-04"), Some(day));
        assert_eq!(iso_date::parse("2025-03-04T08:15:00"), Some(day));
        assert_eq!(iso_date::parse("2025-03-04T08:15:00.250"), Some(day));
        assert_eq!(iso_date::parse("yesterday"), None);
        assert_eq!(iso_date::parse("2025-13-01"), None);
    }
}
