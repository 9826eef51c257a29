use crate::models::ActivityRecord;
use crate::utils::formatting::truncated_hours;

pub const FIELD_SEPARATOR: &str = " | ";

/// Plain-text view: one `dd/mm/yyyy | H | title | description` line per record.
///
/// Hours are truncated to whole numbers here only; every other view keeps
/// the fractional part.
pub fn render_text(records: &[ActivityRecord]) -> String {
    records
        .iter()
        .map(|r| {
            [
                r.date_label(),
                truncated_hours(r.hours).to_string(),
                r.title.clone(),
                r.description.clone(),
            ]
            .join(FIELD_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
