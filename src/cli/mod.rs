//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod history;
pub mod preference;

pub use expense::{
    handle_add_command, handle_categories_command, handle_delete_command, handle_list_command,
    handle_show_command, handle_summary_command, AddArgs, ListArgs,
};
pub use history::handle_history_command;
pub use preference::{handle_theme_command, ThemeChoice};
