// src/export/model.rs

use crate::models::ActivityRecord;
use crate::utils::formatting::decimal_hours;
use serde::Serialize;

/// Flat row used by the JSON / XLSX / PDF exports.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    /// 1-based record number, as shown by `list`.
    pub number: usize,
    pub date: String,
    pub hours: f64,
    pub title: String,
    pub description: String,
}

impl RecordExport {
    pub fn from_records(records: &[(usize, ActivityRecord)]) -> Vec<Self> {
        records
            .iter()
            .map(|(position, r)| RecordExport {
                number: position + 1,
                date: r.date_str(),
                hours: r.hours,
                title: r.title.clone(),
                description: r.description.clone(),
            })
            .collect()
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["number", "date", "hours", "title", "description"]
}

pub(crate) fn record_to_row(e: &RecordExport) -> Vec<String> {
    vec![
        e.number.to_string(),
        e.date.clone(),
        decimal_hours(e.hours),
        e.title.clone(),
        e.description.clone(),
    ]
}

pub(crate) fn records_to_table(records: &[RecordExport]) -> Vec<Vec<String>> {
    records.iter().map(record_to_row).collect()
}
