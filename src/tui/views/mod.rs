//! TUI Views module
//!
//! The entry form, the expense table, the summary panel and the status bar,
//! plus the dialog and toast overlays drawn on top of them.

pub mod expenses;
pub mod form;
pub mod status_bar;
pub mod summary;

use ratatui::widgets::Block;
use ratatui::Frame;

use crate::storage::KeyValueStore;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{notification_area, AppLayout};
use super::widgets::notification::NotificationWidget;

/// Render the entire application
pub fn render<S: KeyValueStore + Clone>(frame: &mut Frame, app: &App<S>) {
    let palette = app.palette();
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let layout = AppLayout::new(area);

    form::render(frame, app, layout.form);
    expenses::render(frame, app, layout.table);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification, &palette),
            notification_area(area),
        );
    }
}
