//! Layout definitions for the TUI
//!
//! Left column: entry form above the expense table. Right column: the
//! spending summary. A one-line status bar runs along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the entry form including its border
const FORM_HEIGHT: u16 = 8;

/// Layout regions for the TUI
pub struct AppLayout {
    pub form: Rect,
    pub table: Rect,
    pub summary: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(64), // Form and table
                Constraint::Percentage(36), // Summary
            ])
            .split(vertical[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(3)])
            .split(horizontal[0]);

        Self {
            form: left[0],
            table: left[1],
            summary: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area for toast notifications: top-right corner, above everything else
pub fn notification_area(r: Rect) -> Rect {
    let width = 44.min(r.width);
    let height = 4.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
