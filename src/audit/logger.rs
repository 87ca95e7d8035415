//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Entries read back from the log
#[derive(Debug, Default)]
pub struct AuditHistory {
    /// Parsed entries, oldest first
    pub entries: Vec<AuditEntry>,
    /// Lines that could not be parsed and were left out
    pub skipped: usize,
}

/// Handles writing audit entries to the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a JSON line
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ExpenseError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ExpenseError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| ExpenseError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read the whole log, skipping lines that are not valid entries
    pub fn read_history(&self) -> ExpenseResult<AuditHistory> {
        if !self.log_path.exists() {
            return Ok(AuditHistory::default());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut history = AuditHistory::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                ExpenseError::Io(format!(
                    "Failed to read audit log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => history.entries.push(entry),
                Err(_) => history.skipped += 1,
            }
        }

        Ok(history)
    }

    /// Read all parseable audit entries, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        Ok(self.read_history()?.entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> ExpenseResult<AuditHistory> {
        let mut history = self.read_history()?;
        let start = history.entries.len().saturating_sub(count);
        history.entries = history.entries.split_off(start);
        Ok(history)
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
