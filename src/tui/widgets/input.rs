//! Text input widget
//!
//! A single-line text field. The cursor is a character index, so
//! multi-byte input such as `₹` edits correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::theme::Palette;

/// A simple text input widget
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    label_color: Color,
    text_color: Color,
    placeholder_color: Color,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: String::new(),
            label_color: Color::Cyan,
            text_color: Color::White,
            placeholder_color: Color::DarkGray,
        }
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content and move the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.char_count();
        self
    }

    /// Take the colors from a palette
    pub fn palette(mut self, palette: &Palette) -> Self {
        self.label_color = palette.accent;
        self.text_color = palette.foreground;
        self.placeholder_color = palette.muted;
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.label.is_empty() {
            0
        } else {
            self.label.chars().count() + 2
        };

        let input_start = area.x + label_width as u16;

        if !self.label.is_empty() {
            let label_line = Line::from(vec![
                Span::styled(&self.label, Style::default().fg(self.label_color)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width as u16);
        }

        let show_placeholder = self.content.is_empty() && !self.focused;
        let (display_text, text_style) = if show_placeholder {
            (&self.placeholder, Style::default().fg(self.placeholder_color))
        } else {
            (&self.content, Style::default().fg(self.text_color))
        };

        buf.set_string(input_start, area.y, display_text, text_style);

        if self.focused {
            let cursor_x = input_start + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or('_');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(self.label_color),
                );
            }
        }
    }
}
