// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{RecordExport, notify_export_success};
use crate::models::ActivityRecord;
use crate::store::RecordStore;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Byte-for-byte copy of the data file.
pub(crate) fn export_raw_csv(content: &[u8], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    fs::write(path, content)?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Filtered CSV in the data file schema, so it can be loaded back as a store.
pub(crate) fn export_csv(records: &[ActivityRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    RecordStore::new(path).save(records)?;

    notify_export_success("CSV", path);
    Ok(())
}
