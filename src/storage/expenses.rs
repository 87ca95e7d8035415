//! Expense repository
//!
//! Holds the expense collection in memory, newest first, and rewrites the
//! whole collection to the store under [`EXPENSES_KEY`] after every mutation.

use std::collections::HashSet;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseId, NewExpense};

use super::KeyValueStore;

/// Store key of the expense collection
pub const EXPENSES_KEY: &str = "expenses";

/// Minimum number of hex digits accepted as a short id
const MIN_PREFIX_LEN: usize = 4;

/// Repository for expense persistence
pub struct ExpenseRepository<S> {
    store: S,
    expenses: Vec<Expense>,
    load_warning: Option<String>,
}

impl<S: KeyValueStore> ExpenseRepository<S> {
    /// Create an empty repository on top of a store
    pub fn new(store: S) -> Self {
        Self {
            store,
            expenses: Vec::new(),
            load_warning: None,
        }
    }

    /// Load the collection from the store
    ///
    /// Never fails: unreadable or malformed data falls back to an empty
    /// collection, and individual broken records are skipped. What was
    /// discarded is reported by [`ExpenseRepository::load_warning`].
    pub fn load(&mut self) {
        self.expenses.clear();
        self.load_warning = None;

        let raw = match self.store.read(EXPENSES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                self.load_warning = Some(format!("Could not read stored expenses: {}", e));
                return;
            }
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                self.load_warning = Some(format!(
                    "Stored expenses are malformed and were ignored: {}",
                    e
                ));
                return;
            }
        };

        let total = records.len();
        let mut seen = HashSet::new();
        for record in records {
            let Ok(expense) = serde_json::from_value::<Expense>(record) else {
                continue;
            };
            if expense.validate().is_ok() && seen.insert(expense.id) {
                self.expenses.push(expense);
            }
        }

        let skipped = total - self.expenses.len();
        if skipped > 0 {
            self.load_warning = Some(format!(
                "Skipped {} invalid stored expense record(s)",
                skipped
            ));
        }
    }

    /// Warning produced by the last [`ExpenseRepository::load`], if any
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// All expenses, newest first
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by full id, `exp-` short id, or unique hex prefix
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<&Expense>> {
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return Ok(self.get(id));
        }

        let trimmed = identifier.trim();
        let hex = trimmed.strip_prefix("exp-").unwrap_or(trimmed);
        if hex.len() < MIN_PREFIX_LEN {
            return Err(ExpenseError::Validation(format!(
                "Expense id '{}' is too short; use at least {} characters",
                identifier, MIN_PREFIX_LEN
            )));
        }

        let matches: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| e.id.matches_prefix(trimmed))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(Some(matches[0])),
            n => Err(ExpenseError::Ambiguous {
                identifier: identifier.to_string(),
                matches: n,
            }),
        }
    }

    /// Store a new expense at the front of the collection
    pub fn add(&mut self, new: NewExpense) -> ExpenseResult<Expense> {
        let expense = Expense::create(new);
        self.expenses.insert(0, expense.clone());

        if let Err(e) = self.save() {
            self.expenses.remove(0);
            return Err(e);
        }

        Ok(expense)
    }

    /// Remove an expense by ID
    ///
    /// Removing an unknown id is a no-op and returns `Ok(None)`.
    pub fn remove(&mut self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        let Some(index) = self.expenses.iter().position(|e| e.id == id) else {
            return Ok(None);
        };

        let removed = self.expenses.remove(index);
        if let Err(e) = self.save() {
            self.expenses.insert(index, removed);
            return Err(e);
        }

        Ok(Some(removed))
    }

    /// Number of stored expenses
    pub fn count(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Rewrite the whole collection to the store
    fn save(&self) -> ExpenseResult<()> {
        let json = serde_json::to_string_pretty(&self.expenses)?;
        self.store.write(EXPENSES_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use crate::storage::{JsonFileStore, MemoryStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    /// Store whose writes always fail
    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn read(&self, _key: &str) -> ExpenseResult<Option<String>> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &str) -> ExpenseResult<()> {
            Err(ExpenseError::Storage("disk full".into()))
        }
    }

    fn new_expense(day: u32, category: Category, description: &str, cents: i64) -> NewExpense {
        NewExpense {
            date: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            category,
            description: description.into(),
            amount: Money::from_cents(cents),
        }
    }

    fn create_test_repo() -> (MemoryStore, ExpenseRepository<MemoryStore>) {
        let store = MemoryStore::new();
        let mut repo = ExpenseRepository::new(store.clone());
        repo.load();
        (store, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_store, repo) = create_test_repo();
        assert!(repo.is_empty());
        assert!(repo.load_warning().is_none());
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let (store, mut repo) = create_test_repo();

        repo.add(new_expense(10, Category::FoodDining, "Lunch", 25000))
            .unwrap();
        repo.add(new_expense(11, Category::Transportation, "Cab", 15000))
            .unwrap();

        let descriptions: Vec<_> = repo.list().iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["Cab", "Lunch"]);

        let stored: Vec<Expense> = serde_json::from_str(&store.raw(EXPENSES_KEY).unwrap()).unwrap();
        assert_eq!(stored, repo.list());
    }

    #[test]
    fn test_add_returns_stored_record() {
        let (_store, mut repo) = create_test_repo();
        let candidate = new_expense(10, Category::Travel, "Train", 9950);

        let expense = repo.add(candidate.clone()).unwrap();
        assert_eq!(expense.date, candidate.date);
        assert_eq!(expense.category, candidate.category);
        assert_eq!(expense.description, candidate.description);
        assert_eq!(expense.amount, candidate.amount);
        assert_eq!(repo.get(expense.id), Some(&expense));
    }

    #[test]
    fn test_ids_unique_across_adds() {
        let (_store, mut repo) = create_test_repo();
        let mut ids = HashSet::new();
        for i in 0..50 {
            let expense = repo
                .add(new_expense(1, Category::Other, "Thing", 100 + i))
                .unwrap();
            assert!(ids.insert(expense.id));
        }
    }

    #[test]
    fn test_remove() {
        let (store, mut repo) = create_test_repo();
        let lunch = repo
            .add(new_expense(10, Category::FoodDining, "Lunch", 25000))
            .unwrap();
        let cab = repo
            .add(new_expense(11, Category::Transportation, "Cab", 15000))
            .unwrap();

        let removed = repo.remove(lunch.id).unwrap();
        assert_eq!(removed, Some(lunch));
        assert_eq!(repo.list(), [cab]);

        let stored: Vec<Expense> = serde_json::from_str(&store.raw(EXPENSES_KEY).unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let (store, mut repo) = create_test_repo();
        repo.add(new_expense(10, Category::FoodDining, "Lunch", 25000))
            .unwrap();
        let before = store.raw(EXPENSES_KEY);

        assert_eq!(repo.remove(ExpenseId::new()).unwrap(), None);
        assert_eq!(repo.count(), 1);
        assert_eq!(store.raw(EXPENSES_KEY), before);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut repo = ExpenseRepository::new(FailingStore);
        repo.load();

        let err = repo
            .add(new_expense(10, Category::FoodDining, "Lunch", 25000))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_save_and_reload_from_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());
        let mut repo = ExpenseRepository::new(store.clone());
        repo.load();

        repo.add(new_expense(10, Category::FoodDining, "Lunch", 25000))
            .unwrap();
        repo.add(new_expense(11, Category::PersonalCare, "Haircut", 12345))
            .unwrap();

        let mut reloaded = ExpenseRepository::new(store);
        reloaded.load();
        assert_eq!(reloaded.list(), repo.list());
        assert!(reloaded.load_warning().is_none());
    }

    #[test]
    fn test_malformed_data_falls_back_to_empty() {
        let store = MemoryStore::with_entry(EXPENSES_KEY, "{not json");
        let mut repo = ExpenseRepository::new(store);
        repo.load();

        assert!(repo.is_empty());
        assert!(repo.load_warning().unwrap().contains("malformed"));
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let raw = r#"[
            {"id": "550e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Food & Dining", "description": "Lunch", "amount": 250},
            {"id": "550e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Food & Dining", "description": "Duplicate", "amount": 1},
            {"id": "650e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Groceries", "description": "Bad category", "amount": 5},
            {"id": "750e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Other", "description": "Negative", "amount": -5}
        ]"#;
        let mut repo = ExpenseRepository::new(MemoryStore::with_entry(EXPENSES_KEY, raw));
        repo.load();

        assert_eq!(repo.count(), 1);
        assert_eq!(repo.list()[0].description, "Lunch");
        assert!(repo.load_warning().unwrap().contains("3"));
    }

    #[test]
    fn test_out_of_range_amounts_are_skipped() {
        let raw = r#"[
            {"id": "550e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Other", "description": "Huge", "amount": 92233720368547758},
            {"id": "650e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Other", "description": "Also huge", "amount": 100000000000},
            {"id": "750e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Other", "description": "Sub-cent", "amount": 10.999},
            {"id": "850e8400-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Other", "description": "Fine", "amount": 10.99}
        ]"#;
        let mut repo = ExpenseRepository::new(MemoryStore::with_entry(EXPENSES_KEY, raw));
        repo.load();

        assert_eq!(repo.count(), 1);
        assert_eq!(repo.list()[0].amount.cents(), 1099);
        assert!(repo.load_warning().unwrap().contains("3"));
    }

    #[test]
    fn test_find_by_full_and_short_id() {
        let (_store, mut repo) = create_test_repo();
        let expense = repo
            .add(new_expense(10, Category::FoodDining, "Lunch", 25000))
            .unwrap();

        let full = expense.id.as_uuid().to_string();
        assert_eq!(repo.find(&full).unwrap(), Some(&expense));
        assert_eq!(repo.find(&expense.id.to_string()).unwrap(), Some(&expense));
        assert_eq!(repo.find(&full[..6]).unwrap(), Some(&expense));
        assert!(repo.find("ab").is_err());
    }

    #[test]
    fn test_find_ambiguous_prefix() {
        let raw = r#"[
            {"id": "aaaa1111-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Other", "description": "One", "amount": 1},
            {"id": "aaaa2222-e29b-41d4-a716-446655440000", "date": "2025-01-10",
             "category": "Other", "description": "Two", "amount": 2}
        ]"#;
        let mut repo = ExpenseRepository::new(MemoryStore::with_entry(EXPENSES_KEY, raw));
        repo.load();

        let err = repo.find("aaaa").unwrap_err();
        assert!(matches!(err, ExpenseError::Ambiguous { matches: 2, .. }));
        assert_eq!(repo.find("aaaa1").unwrap().unwrap().description, "One");
        assert_eq!(repo.find("bbbb").unwrap(), None);
    }
}
