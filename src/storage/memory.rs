//! In-memory key-value store
//!
//! Clones share the same map, so several repositories can sit on one store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ExpenseResult;

use super::KeyValueStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one raw entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().insert(key.into(), value.into());
        store
    }

    /// Raw stored text for a key
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> ExpenseResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> ExpenseResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
