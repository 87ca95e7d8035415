//! Event handler for the TUI
//!
//! Routes keyboard events to the form, the table or the open dialog.
//! Handlers that change stored data go through [`App`] methods, which
//! refresh the view model themselves.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::ExpenseResult;
use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App, FocusedPanel};
use super::event::Event;
use super::views::form::FormField;

/// Handle an incoming event
pub fn handle_event<S: KeyValueStore + Clone>(app: &mut App<S>, event: Event) -> ExpenseResult<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event<S: KeyValueStore + Clone>(app: &mut App<S>, key: KeyEvent) -> ExpenseResult<()> {
    // Windows reports releases as well as presses
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    match app.focused_panel {
        FocusedPanel::Form => handle_form_key(app, key),
        FocusedPanel::Table => handle_table_key(app, key),
    }
    Ok(())
}

/// Handle keys while the table has focus
fn handle_table_key<S: KeyValueStore + Clone>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_bottom(),

        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('f') | KeyCode::Char(']') => app.cycle_filter(true),
        KeyCode::Char('F') | KeyCode::Char('[') => app.cycle_filter(false),

        KeyCode::Char('t') => app.toggle_theme(),

        KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Tab => app.toggle_panel_focus(),

        _ => {}
    }
}

/// Handle keys while the entry form has focus
fn handle_form_key<S: KeyValueStore + Clone>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focused_panel = FocusedPanel::Table,
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab => app.form.next_field(),
        KeyCode::BackTab => app.form.prev_field(),
        _ if app.form.focused_field == FormField::Category => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => app.form.cycle_category(true),
            KeyCode::Left | KeyCode::Up => app.form.cycle_category(false),
            _ => {}
        },
        _ => {
            let Some(input) = app.form.focused_input() else {
                return;
            };
            match key.code {
                KeyCode::Char(c) => input.insert(c),
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => input.move_left(),
                KeyCode::Right => input.move_right(),
                KeyCode::Home => input.move_start(),
                KeyCode::End => input.move_end(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{CategoryFilter, Theme};
    use crate::storage::{MemoryStore, Storage};

    fn press(app: &mut App<MemoryStore>, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn storage() -> Storage<MemoryStore> {
        let mut storage = Storage::with_store(MemoryStore::new(), None);
        storage.load_all();
        storage
    }

    #[test]
    fn test_add_expense_with_keys() {
        let mut storage = storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        // Date field: replace today's date
        for _ in 0..10 {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "2025-01-10");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Lunch");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "250");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.visible[0].description, "Lunch");
        assert_eq!(app.form.focused_field, FormField::Category);
    }

    #[test]
    fn test_table_keys() {
        let mut storage = storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focused_panel, FocusedPanel::Table);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme, Theme::Dark);

        press(&mut app, KeyCode::Char('f'));
        assert_ne!(app.filter, CategoryFilter::All);
        press(&mut app, KeyCode::Char('F'));
        assert_eq!(app.filter, CategoryFilter::All);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.has_dialog());
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_in_form_is_text() {
        let mut storage = storage();
        let settings = Settings::default();
        let mut app = App::new(&mut storage, &settings);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.form.description_input.value(), "q");

        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
    }
}
