//! Storage layer for the expense tracker
//!
//! A synchronous key-value store sits at the bottom; the expense and
//! preference repositories keep their state in memory and rewrite their key
//! after every change. [`Storage`] bundles them with the audit logger and is
//! the application state handed to services and views.

pub mod expenses;
pub mod file_io;
pub mod file_store;
pub mod memory;
pub mod preferences;

pub use expenses::{ExpenseRepository, EXPENSES_KEY};
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;
pub use preferences::{PreferenceRepository, DARK_MODE_KEY};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseResult;

/// Synchronous key-value persistence
pub trait KeyValueStore {
    /// Raw stored text for a key, `None` if the key was never written
    fn read(&self, key: &str) -> ExpenseResult<Option<String>>;

    /// Replace the stored text for a key
    fn write(&self, key: &str, value: &str) -> ExpenseResult<()>;

    /// Typed read: absent, unreadable or malformed values yield the default
    fn get<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.read(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => T::default(),
        }
    }

    /// Typed write, serialized as JSON
    fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ExpenseResult<()> {
        let json = serde_json::to_string(value)?;
        self.write(key, &json)
    }
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage<S: KeyValueStore + Clone = JsonFileStore> {
    pub expenses: ExpenseRepository<S>,
    pub preferences: PreferenceRepository<S>,
    audit: Option<AuditLogger>,
    audit_warning: Option<String>,
}

impl Storage<JsonFileStore> {
    /// Open the file-backed storage described by the paths and settings
    pub fn open(paths: &ExpensePaths, settings: &Settings) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let store = JsonFileStore::new(paths.data_dir());
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self::with_store(store, audit))
    }
}

impl<S: KeyValueStore + Clone> Storage<S> {
    /// Create storage on top of an arbitrary store
    pub fn with_store(store: S, audit: Option<AuditLogger>) -> Self {
        Self {
            expenses: ExpenseRepository::new(store.clone()),
            preferences: PreferenceRepository::new(store),
            audit,
            audit_warning: None,
        }
    }

    /// Load all data from the store
    pub fn load_all(&mut self) {
        self.expenses.load();
        self.preferences.load();
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Take the message left by the last audit write that failed
    ///
    /// Audit entries are written after the data change has been persisted,
    /// so a failing audit log never undoes or fails the change itself.
    pub fn take_audit_warning(&mut self) -> Option<String> {
        self.audit_warning.take()
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(|| AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
    ) {
        self.record(|| AuditEntry::update(entity_type, entity_id, None, before, after));
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &mut self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(|| AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    fn record(&mut self, entry: impl FnOnce() -> AuditEntry) {
        let Some(logger) = &self.audit else {
            return;
        };

        if let Err(e) = logger.log(&entry()) {
            self.audit_warning = Some(format!(
                "Change saved, but the audit log could not be written: {}",
                e
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::open(&paths, &Settings::default()).unwrap();
        storage.load_all();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.expenses.is_empty());
        assert!(!storage.preferences.dark_mode());
        assert!(storage.audit().is_some());
    }

    #[test]
    fn test_audit_disabled_by_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let mut storage = Storage::open(&paths, &settings).unwrap();

        storage.log_create(EntityType::Expense, "exp-1", None, &"x");
        assert!(storage.audit().is_none());
        assert!(storage.take_audit_warning().is_none());
        assert!(!paths.audit_log().exists());
    }

    #[test]
    fn test_repositories_share_store() {
        let store = MemoryStore::new();
        let mut storage = Storage::with_store(store.clone(), None);
        storage.preferences.set_dark_mode(true).unwrap();

        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("true"));
        assert_eq!(store.raw(EXPENSES_KEY), None);
    }

    #[test]
    fn test_log_helpers_write_entries() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut storage = Storage::with_store(MemoryStore::new(), Some(logger));

        storage.log_update(EntityType::Preference, DARK_MODE_KEY, &false, &true);

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].entity_type, EntityType::Preference);
        assert!(storage.take_audit_warning().is_none());
    }

    #[test]
    fn test_failed_audit_write_becomes_warning() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as the log file
        let logger = AuditLogger::new(temp_dir.path().to_path_buf());
        let mut storage = Storage::with_store(MemoryStore::new(), Some(logger));

        storage.log_delete(EntityType::Expense, "exp-1", None, &"x");

        let warning = storage.take_audit_warning().unwrap();
        assert!(warning.contains("audit log"));
        assert!(storage.take_audit_warning().is_none());
    }

    #[test]
    fn test_typed_helpers() {
        let store = MemoryStore::new();
        assert_eq!(store.get::<Vec<u32>>("numbers"), Vec::<u32>::new());

        store.set("numbers", &vec![1, 2, 3]).unwrap();
        assert_eq!(store.get::<Vec<u32>>("numbers"), vec![1, 2, 3]);

        store.write("numbers", "not json").unwrap();
        assert!(store.get::<Vec<u32>>("numbers").is_empty());
    }
}
