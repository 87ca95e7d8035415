//! Audit history CLI command

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Handle `history`: print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled (set \"audit_enabled\": true in the settings file).");
        return Ok(());
    };

    let history = logger.read_recent(limit)?;
    if history.skipped > 0 {
        eprintln!(
            "Warning: skipped {} unreadable audit log line(s)",
            history.skipped
        );
    }
    if history.entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in history.entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
