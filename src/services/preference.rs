//! Preference service: reads and changes the persisted theme

use crate::audit::EntityType;
use crate::error::ExpenseResult;
use crate::models::Theme;
use crate::storage::{KeyValueStore, Storage, DARK_MODE_KEY};

/// Service for the dark-mode preference
pub struct PreferenceService<'a, S: KeyValueStore + Clone> {
    storage: &'a mut Storage<S>,
}

impl<'a, S: KeyValueStore + Clone> PreferenceService<'a, S> {
    pub fn new(storage: &'a mut Storage<S>) -> Self {
        Self { storage }
    }

    /// The current theme
    pub fn theme(&self) -> Theme {
        self.storage.preferences.theme()
    }

    /// Persist a theme; unchanged values are not written again
    pub fn set_theme(&mut self, theme: Theme) -> ExpenseResult<Theme> {
        let before = self.storage.preferences.dark_mode();
        let after = theme.is_dark();
        if before == after {
            return Ok(theme);
        }

        self.storage.preferences.set_dark_mode(after)?;
        self.storage
            .log_update(EntityType::Preference, DARK_MODE_KEY, &before, &after);

        Ok(theme)
    }

    /// Switch to the other theme and return it
    pub fn toggle(&mut self) -> ExpenseResult<Theme> {
        let next = self.theme().toggled();
        self.set_theme(next)
    }
}
