//! Toast notification widget
//!
//! Short-lived messages shown after adding or deleting an expense, on
//! validation failures, and when stored data could not be loaded.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::tui::theme::Palette;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// Border color for this notification type
    pub fn color(&self, palette: &Palette) -> Color {
        match self {
            Self::Info => palette.accent,
            Self::Success => palette.success,
            Self::Warning => palette.warning,
            Self::Error => palette.danger,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    /// How long the toast stays on screen
    fn default_duration(&self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_secs(3),
            Self::Warning | Self::Error => Duration::from_secs(5),
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.default_duration(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    palette: &'a Palette,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, palette: &'a Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color(self.palette);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(self.palette.base())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop the current toast once it has been shown long enough
    pub fn remove_expired(&mut self) {
        if self.notifications.first().is_some_and(|n| n.is_expired()) {
            self.notifications.remove(0);
            if let Some(next) = self.notifications.first_mut() {
                next.created_at = Instant::now();
            }
        }
    }

    /// The toast to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;

    #[test]
    fn test_notification_colors_follow_palette() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(NotificationType::Success.color(&palette), palette.success);
        assert_eq!(NotificationType::Error.color(&palette), palette.danger);
    }

    #[test]
    fn test_queue_shows_oldest_first() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::success("Expense added successfully!"));
        queue.push(Notification::success("Expense deleted"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "Expense added successfully!");
    }

    #[test]
    fn test_expired_toast_is_removed() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::info("gone").with_duration(Duration::ZERO));
        queue.push(Notification::info("next"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "next");

        queue.remove_expired();
        assert_eq!(queue.len(), 1);

        queue.clear();
        assert!(queue.is_empty());
    }
}
