// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, records_to_table};
use crate::export::pdf::TableDocument;
use crate::export::{RecordExport, notify_export_success};
use crate::ui::messages::info;
use crate::utils::formatting::decimal_hours;
use std::path::Path;

/// PDF export: the activity table followed by the daily totals.
pub(crate) fn export_pdf(
    records: &[RecordExport],
    totals: &[(String, f64)],
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let rows = records_to_table(records);

    let mut pdf = TableDocument::a4();
    pdf.add_table(title, &headers, &rows);

    let total_rows: Vec<Vec<String>> = totals
        .iter()
        .map(|(label, hours)| vec![label.clone(), decimal_hours(*hours)])
        .collect();
    pdf.add_table("Total hours per day", &["day", "total hours"], &total_rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
