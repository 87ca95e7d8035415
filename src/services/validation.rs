//! Entry validation
//!
//! Turns raw form or command-line input into a [`NewExpense`]. Rules run in
//! a fixed order and the first failure is reported; nothing is stored when
//! validation fails.

use chrono::NaiveDate;
use std::fmt;

use crate::models::{Category, Money, MoneyParseError, NewExpense};

/// Raw expense input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// `YYYY-MM-DD`; empty means today
    pub date: String,
    /// Category name or keyword; `None` when nothing was selected
    pub category: Option<String>,
    pub description: String,
    pub amount: String,
}

impl ExpenseDraft {
    /// Validate the draft
    ///
    /// `today` fills in an empty date; `currency_symbol` is stripped from
    /// the amount in addition to the common symbols.
    pub fn validate(
        &self,
        today: NaiveDate,
        currency_symbol: &str,
    ) -> Result<NewExpense, ValidationError> {
        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::MissingCategory),
            Some(name) => name
                .parse::<Category>()
                .map_err(|_| ValidationError::UnknownCategory(name.to_string()))?,
        };

        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::BlankDescription);
        }

        let amount = match Money::parse_with_symbol(&self.amount, currency_symbol) {
            Ok(amount) => amount,
            Err(MoneyParseError::Empty) => return Err(ValidationError::MissingAmount),
            Err(MoneyParseError::TooManyDecimals(_)) => {
                return Err(ValidationError::TooManyDecimals)
            }
            Err(MoneyParseError::InvalidFormat(_) | MoneyParseError::OutOfRange(_)) => {
                return Err(ValidationError::InvalidAmount(self.amount.trim().to_string()))
            }
        };
        if !amount.is_positive() {
            return Err(ValidationError::NonPositiveAmount);
        }
        if amount > Money::MAX_AMOUNT {
            return Err(ValidationError::AmountTooLarge);
        }

        let date = match self.date.trim() {
            "" => today,
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate(raw.to_string()))?,
        };

        Ok(NewExpense {
            date,
            category,
            description: description.to_string(),
            amount,
        })
    }
}

/// Reasons an entry is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingCategory,
    UnknownCategory(String),
    BlankDescription,
    MissingAmount,
    InvalidAmount(String),
    TooManyDecimals,
    NonPositiveAmount,
    AmountTooLarge,
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Please select a category"),
            Self::UnknownCategory(name) => write!(f, "Unknown category '{}'", name),
            Self::BlankDescription => write!(f, "Please enter a description"),
            Self::MissingAmount => write!(f, "Please enter an amount"),
            Self::InvalidAmount(raw) => write!(f, "Please enter a valid amount (got '{}')", raw),
            Self::TooManyDecimals => write!(f, "Amount can have at most two decimal places"),
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::AmountTooLarge => write!(
                f,
                "Amount cannot exceed {}",
                Money::MAX_AMOUNT.format_with_symbol("")
            ),
            Self::InvalidDate(raw) => write!(f, "Invalid date '{}'. Use YYYY-MM-DD", raw),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn draft(category: Option<&str>, description: &str, amount: &str) -> ExpenseDraft {
        ExpenseDraft {
            date: "2025-01-10".into(),
            category: category.map(String::from),
            description: description.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let new = draft(Some("Food & Dining"), "  Lunch  ", "250")
            .validate(today(), "₹")
            .unwrap();
        assert_eq!(new.category, Category::FoodDining);
        assert_eq!(new.description, "Lunch");
        assert_eq!(new.amount.cents(), 25000);
        assert_eq!(new.date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
    }

    #[test]
    fn test_empty_date_means_today() {
        let mut d = draft(Some("travel"), "Train", "12.5");
        d.date = "  ".into();
        assert_eq!(d.validate(today(), "").unwrap().date, today());
    }

    #[test]
    fn test_category_rules() {
        assert_eq!(
            draft(None, "Lunch", "1").validate(today(), ""),
            Err(ValidationError::MissingCategory)
        );
        assert_eq!(
            draft(Some("  "), "Lunch", "1").validate(today(), ""),
            Err(ValidationError::MissingCategory)
        );
        assert_eq!(
            draft(Some("Groceries"), "Lunch", "1").validate(today(), ""),
            Err(ValidationError::UnknownCategory("Groceries".into()))
        );
    }

    #[test]
    fn test_blank_description() {
        assert_eq!(
            draft(Some("food"), " \t ", "1").validate(today(), ""),
            Err(ValidationError::BlankDescription)
        );
    }

    #[test]
    fn test_amount_rules() {
        let check = |amount: &str| draft(Some("food"), "Lunch", amount).validate(today(), "₹");

        assert_eq!(check(""), Err(ValidationError::MissingAmount));
        assert_eq!(check("abc"), Err(ValidationError::InvalidAmount("abc".into())));
        assert_eq!(check("0"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(check("-5"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(check("0.00"), Err(ValidationError::NonPositiveAmount));
        assert_eq!(check("₹99.99").unwrap().amount.cents(), 9999);
    }

    #[test]
    fn test_amount_precision_is_exact() {
        let check = |amount: &str| draft(Some("food"), "Lunch", amount).validate(today(), "");

        assert_eq!(check("10.999"), Err(ValidationError::TooManyDecimals));
        assert_eq!(check("0.009"), Err(ValidationError::TooManyDecimals));
        assert_eq!(check("0.01").unwrap().amount.cents(), 1);
        assert_eq!(check("10.99").unwrap().amount.cents(), 1099);
    }

    #[test]
    fn test_amount_upper_bound() {
        let check = |amount: &str| draft(Some("food"), "Lunch", amount).validate(today(), "");

        assert_eq!(
            check("99999999999.99").unwrap().amount,
            Money::MAX_AMOUNT
        );
        assert_eq!(check("100000000000"), Err(ValidationError::AmountTooLarge));
        assert_eq!(check("92233720368547758"), Err(ValidationError::AmountTooLarge));
        assert_eq!(
            check("99999999999999999999"),
            Err(ValidationError::InvalidAmount("99999999999999999999".into()))
        );
    }

    #[test]
    fn test_invalid_date() {
        let mut d = draft(Some("food"), "Lunch", "1");
        d.date = "10/01/2025".into();
        assert_eq!(
            d.validate(today(), ""),
            Err(ValidationError::InvalidDate("10/01/2025".into()))
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let everything_wrong = ExpenseDraft {
            date: "nope".into(),
            category: None,
            description: String::new(),
            amount: "-1".into(),
        };
        assert_eq!(
            everything_wrong.validate(today(), ""),
            Err(ValidationError::MissingCategory)
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::NonPositiveAmount.to_string(),
            "Amount must be greater than zero"
        );
        assert_eq!(
            ValidationError::MissingCategory.to_string(),
            "Please select a category"
        );
    }
}
