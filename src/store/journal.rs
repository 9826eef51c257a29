//! Append-only audit trail of store mutations.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the journal at `path`.
pub fn record(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let has_content = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!has_content)
        .from_writer(file);

    wtr.serialize(JournalEntry {
        timestamp: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    })?;
    wtr.flush()?;

    Ok(())
}

/// All journal lines, oldest first. A missing journal reads as empty.
pub fn read_all(path: &Path) -> AppResult<Vec<JournalEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for row in rdr.deserialize() {
        entries.push(row?);
    }

    Ok(entries)
}
