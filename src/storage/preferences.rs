//! Preference repository
//!
//! Persists the dark-mode flag under [`DARK_MODE_KEY`] as the text `true`
//! or `false`, independently of the expense collection.

use crate::error::ExpenseResult;
use crate::models::Theme;

use super::KeyValueStore;

/// Store key of the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Repository for the dark-mode preference
pub struct PreferenceRepository<S> {
    store: S,
    dark_mode: bool,
}

impl<S: KeyValueStore> PreferenceRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            dark_mode: false,
        }
    }

    /// Load the flag; anything other than the text `true` reads as false
    pub fn load(&mut self) {
        self.dark_mode = self.store.get(DARK_MODE_KEY);
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    /// Set and persist the flag
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> ExpenseResult<()> {
        self.store.set(DARK_MODE_KEY, &dark_mode)?;
        self.dark_mode = dark_mode;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let mut prefs = PreferenceRepository::new(MemoryStore::new());
        prefs.load();
        assert!(!prefs.dark_mode());
        assert_eq!(prefs.theme(), Theme::Light);
    }

    #[test]
    fn test_set_persists_as_text() {
        let store = MemoryStore::new();
        let mut prefs = PreferenceRepository::new(store.clone());

        prefs.set_dark_mode(true).unwrap();
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("true"));

        let mut reloaded = PreferenceRepository::new(store.clone());
        reloaded.load();
        assert!(reloaded.dark_mode());

        prefs.set_dark_mode(false).unwrap();
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_garbage_reads_as_false() {
        let mut prefs = PreferenceRepository::new(MemoryStore::with_entry(DARK_MODE_KEY, "yes"));
        prefs.load();
        assert!(!prefs.dark_mode());
    }
}
