//! Color palettes for the light and dark themes

use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Colors used by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub highlight: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                highlight: Color::LightBlue,
                success: Color::Green,
                warning: Color::Rgb(176, 122, 0),
                danger: Color::Red,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                highlight: Color::DarkGray,
                success: Color::LightGreen,
                warning: Color::Yellow,
                danger: Color::LightRed,
            },
        }
    }

    /// Base style: foreground on background
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Border style for a panel, brighter when it has focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}
