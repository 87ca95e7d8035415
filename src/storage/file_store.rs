//! Key-value store backed by one JSON file per key

use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};

use super::file_io::{read_optional, write_atomic};
use super::KeyValueStore;

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the store files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of the file backing a key
    pub fn key_path(&self, key: &str) -> ExpenseResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ExpenseError::Storage(format!("Invalid store key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> ExpenseResult<Option<String>> {
        read_optional(self.key_path(key)?)
    }

    fn write(&self, key: &str, value: &str) -> ExpenseResult<()> {
        write_atomic(self.key_path(key)?, value)
    }
}
