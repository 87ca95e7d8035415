//! Display preferences persisted alongside the expense list

use std::fmt;
use std::str::FromStr;

/// Color theme of the interactive interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Build a theme from the stored dark-mode flag
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" | "off" => Ok(Self::Light),
            "dark" | "on" => Ok(Self::Dark),
            other => Err(format!("Unknown theme '{}'; use 'dark' or 'light'", other)),
        }
    }
}
