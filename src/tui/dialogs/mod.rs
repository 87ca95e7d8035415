//! Modal dialogs drawn over the main views

pub mod help;
