//! Terminal User Interface module
//!
//! An interactive expense tracker built on ratatui: an entry form, a
//! filterable expense table, a spending summary, a light/dark theme and
//! toast notifications.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod theme;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
