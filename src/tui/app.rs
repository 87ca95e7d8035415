//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The visible rows and the summary are a view model derived from storage;
//! every handler that changes storage calls [`App::refresh`] afterwards.

use crate::config::settings::Settings;
use crate::models::{CategoryFilter, Expense, Theme};
use crate::reports::SpendingSummary;
use crate::services::{ExpenseService, PreferenceService};
use crate::storage::{JsonFileStore, KeyValueStore, Storage};

use super::theme::Palette;
use super::views::form::ExpenseFormState;
use super::widgets::notification::{Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Form,
    Table,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a, S: KeyValueStore + Clone = JsonFileStore> {
    pub storage: &'a mut Storage<S>,
    pub settings: &'a Settings,
    pub should_quit: bool,
    pub focused_panel: FocusedPanel,
    pub active_dialog: ActiveDialog,
    pub form: ExpenseFormState,
    /// Category filter of the expense table
    pub filter: CategoryFilter,
    /// Selected row in the expense table
    pub selected_index: usize,
    /// Rows shown in the table, newest first
    pub visible: Vec<Expense>,
    /// Summary over all expenses, independent of the filter
    pub summary: SpendingSummary,
    pub theme: Theme,
    pub notifications: NotificationQueue,
}

impl<'a, S: KeyValueStore + Clone> App<'a, S> {
    /// Create the app over already loaded storage
    pub fn new(storage: &'a mut Storage<S>, settings: &'a Settings) -> Self {
        let theme = storage.preferences.theme();
        let mut notifications = NotificationQueue::new();
        if let Some(warning) = storage.expenses.load_warning() {
            notifications.push(Notification::warning(warning));
        }

        let mut app = Self {
            storage,
            settings,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            form: ExpenseFormState::new(),
            filter: CategoryFilter::All,
            selected_index: 0,
            visible: Vec::new(),
            summary: SpendingSummary::generate(&[]),
            theme,
            notifications,
        };
        app.refresh();
        app
    }

    /// Recompute the table rows and the summary from storage
    pub fn refresh(&mut self) {
        let service = ExpenseService::new(self.storage);
        self.visible = service.list(self.filter);
        self.summary = service.summary();

        if self.selected_index >= self.visible.len() {
            self.selected_index = self.visible.len().saturating_sub(1);
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Show a pending audit failure as a warning toast
    fn notify_audit_warning(&mut self) {
        if let Some(warning) = self.storage.take_audit_warning() {
            self.notify(Notification::warning(warning));
        }
    }

    /// Validate the form and add the expense
    ///
    /// On failure the form keeps its contents and shows the message.
    pub fn submit_form(&mut self) {
        let draft = self.form.to_draft();
        let result = ExpenseService::new(self.storage)
            .with_currency_symbol(self.settings.currency_symbol.as_str())
            .add(&draft);

        match result {
            Ok(_) => {
                self.form.reset_after_submit();
                self.refresh();
                self.notify(Notification::success("Expense added successfully!"));
                self.notify_audit_warning();
            }
            Err(e) => {
                let message = match e {
                    crate::error::ExpenseError::Validation(message) => message,
                    other => other.to_string(),
                };
                self.form.error_message = Some(message.clone());
                self.notify(Notification::error(message));
            }
        }
    }

    /// Delete the expense under the cursor
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_expense().map(|e| e.id) else {
            return;
        };

        match ExpenseService::new(self.storage).remove(id) {
            Ok(_) => {
                self.refresh();
                self.notify(Notification::success("Expense deleted"));
                self.notify_audit_warning();
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Switch between the light and dark theme and persist the choice
    pub fn toggle_theme(&mut self) {
        match PreferenceService::new(self.storage).toggle() {
            Ok(theme) => {
                self.theme = theme;
                self.notify_audit_warning();
            }
            Err(e) => self.notify(Notification::error(e.to_string())),
        }
    }

    /// Move the table filter to the next or previous category
    pub fn cycle_filter(&mut self, forward: bool) {
        self.filter = if forward {
            self.filter.next()
        } else {
            self.filter.previous()
        };
        self.selected_index = 0;
        self.refresh();
    }

    pub fn selected_expense(&self) -> Option<&Expense> {
        self.visible.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_top(&mut self) {
        self.selected_index = 0;
    }

    pub fn move_bottom(&mut self) {
        self.selected_index = self.visible.len().saturating_sub(1);
    }

    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Form => FocusedPanel::Table,
            FocusedPanel::Table => FocusedPanel::Form,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }
}
