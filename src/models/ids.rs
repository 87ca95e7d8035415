//! Strongly-typed identifier for expenses
//!
//! The newtype keeps expense ids from being confused with arbitrary strings
//! and gives them a short, human-friendly display form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used by the short display form
pub const EXPENSE_ID_PREFIX: &str = "exp-";

/// Unique identifier of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string, with or without the `exp-` prefix
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        s.parse()
    }

    /// Check whether a (possibly prefixed) hex prefix identifies this ID
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim();
        let prefix = prefix.strip_prefix(EXPENSE_ID_PREFIX).unwrap_or(prefix);
        if prefix.is_empty() {
            return false;
        }
        let prefix = prefix.to_ascii_lowercase();
        let full = self.0.to_string();
        full.starts_with(&prefix) || self.0.simple().to_string().starts_with(&prefix)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EXPENSE_ID_PREFIX, &self.0.simple().to_string()[..8])
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(EXPENSE_ID_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
