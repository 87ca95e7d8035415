//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is written as a plain decimal number so the
//! stored expense list stays readable and compatible with other tools.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Currency symbols stripped from input before parsing
const KNOWN_SYMBOLS: [&str; 4] = ["$", "₹", "€", "£"];

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest amount a single expense may hold (99,999,999,999.99)
    ///
    /// Well below 2^53 cents, so every allowed amount survives the trip
    /// through a JSON number unchanged.
    pub const MAX_AMOUNT: Money = Money(9_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole units and cents
    pub const fn from_units_cents(units: i64, cents: i64) -> Self {
        Self(units * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Get the amount as a decimal value
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum that clamps at the i64 range instead of overflowing
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Convert a stored decimal, rejecting values that are not whole cents
    /// or that exceed [`Money::MAX_AMOUNT`] in magnitude
    pub fn try_from_decimal(value: f64) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(value.to_string());
        if !value.is_finite() {
            return Err(invalid());
        }
        if value.abs() > Self::MAX_AMOUNT.as_decimal() {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }

        // Whole cents come back as exactly the decimal we write, give or
        // take float noise such as 0.30000000000000004
        let money = Self((value * 100.0).round() as i64);
        let tolerance = 4.0 * f64::EPSILON * value.abs().max(1.0);
        if (money.as_decimal() - value).abs() > tolerance {
            return Err(MoneyParseError::TooManyDecimals(value.to_string()));
        }
        Ok(money)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "₹1,250", "10", ".5".
    /// More than two decimal places is an error, never a silent rounding.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        Self::parse_with_symbol(s, "")
    }

    /// Parse a money amount, additionally stripping a configured currency symbol
    pub fn parse_with_symbol(s: &str, symbol: &str) -> Result<Self, MoneyParseError> {
        let original = s.trim();
        if original.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, s) = match original.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, original.strip_prefix('+').unwrap_or(original)),
        };

        let s = strip_symbol(s, symbol).trim();
        let s: String = s.chars().filter(|c| *c != ',' && *c != '_').collect();

        let invalid = || MoneyParseError::InvalidFormat(original.to_string());

        let (units_str, cents_str) = match s.split_once('.') {
            Some((units, cents)) => (units, cents),
            None => (s.as_str(), ""),
        };

        if units_str.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }
        if !units_str.chars().all(|c| c.is_ascii_digit())
            || !cents_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match cents_str.len() {
            0 => 0,
            1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
            2 => cents_str.parse().map_err(|_| invalid())?,
            _ => return Err(MoneyParseError::TooManyDecimals(original.to_string())),
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

fn strip_symbol<'a>(s: &'a str, symbol: &str) -> &'a str {
    if !symbol.is_empty() {
        if let Some(stripped) = s.strip_prefix(symbol) {
            return stripped;
        }
    }
    KNOWN_SYMBOLS
        .iter()
        .find_map(|sym| s.strip_prefix(sym))
        .unwrap_or(s)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol(""))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::try_from_decimal(value).map_err(de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooManyDecimals(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooManyDecimals(s) => {
                write!(f, "Amount has more than two decimal places: {}", s)
            }
            MoneyParseError::OutOfRange(s) => write!(f, "Amount is out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
