// src/export/logic.rs

use crate::core::calculator::daily::daily_totals;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json, export_raw_csv};
use crate::export::model::RecordExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::date::month_name;
use crate::utils::range::DateRange;
use std::path::Path;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the activity log.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a range expression (see `DateRange`)
    ///
    /// CSV without a range is a byte copy of the data file. Every other
    /// combination is rebuilt from the loaded records.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = DateRange::parse_opt(range)?;

        ensure_writable(path, force)?;

        if format == ExportFormat::Csv && bounds.is_none() {
            return export_raw_csv(&store.raw_content()?, path);
        }

        let records = store.load()?;
        let selected: Vec<(usize, _)> = records
            .into_iter()
            .enumerate()
            .filter(|(_, r)| bounds.is_none_or(|b| b.contains(r.date)))
            .collect();

        if selected.is_empty() {
            warning("No activities found for the selected range.");
            return Ok(());
        }

        let plain: Vec<_> = selected.iter().map(|(_, r)| r.clone()).collect();
        let totals: Vec<(String, f64)> = daily_totals(&plain)
            .iter()
            .map(|t| (t.label(), t.total_hours))
            .collect();
        let rows = RecordExport::from_records(&selected);

        match format {
            ExportFormat::Csv => export_csv(&plain, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &totals, path)?,
            ExportFormat::Pdf => export_pdf(&rows, &totals, path, &build_pdf_title(range))?,
        }

        Ok(())
    }
}

/// PDF title describing the selected period.
fn build_pdf_title(range: Option<&str>) -> String {
    let Some(p) = range.map(str::trim) else {
        return "Activity report".to_string();
    };

    match p.len() {
        // YYYY
        4 => format!("Activity report for year {}", p),
        // YYYY-MM
        7 => format!("Activity report for {} {}", month_name(&p[5..7]), &p[0..4]),
        // YYYY-MM-DD
        10 => format!("Activity report for {}", p),
        _ => match p.split_once(':') {
            Some((from, to)) => format!("Activity report from {} to {}", from, to),
            None => "Activity report".to_string(),
        },
    }
}
