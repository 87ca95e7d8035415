//! Theme CLI command

use clap::ValueEnum;

use crate::error::ExpenseResult;
use crate::models::Theme;
use crate::services::PreferenceService;
use crate::storage::Storage;

/// Requested theme change
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
    /// Switch to the other theme
    Toggle,
}

/// Handle `theme`; without a choice the current theme is printed
pub fn handle_theme_command(storage: &mut Storage, choice: Option<ThemeChoice>) -> ExpenseResult<()> {
    let mut service = PreferenceService::new(storage);

    let theme = match choice {
        None => {
            println!("Current theme: {}", service.theme());
            return Ok(());
        }
        Some(ThemeChoice::Dark) => service.set_theme(Theme::Dark)?,
        Some(ThemeChoice::Light) => service.set_theme(Theme::Light)?,
        Some(ThemeChoice::Toggle) => service.toggle()?,
    };

    println!("Theme set to {}", theme);
    Ok(())
}
