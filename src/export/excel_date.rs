// src/export/excel_date.rs

use chrono::NaiveDate;

/// Excel serial day number of an ISO date (`YYYY-MM-DD`), if `s` is one.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<f64> {
    let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    Some(naive_date_to_excel_serial(d))
}

fn naive_date_to_excel_serial(d: NaiveDate) -> f64 {
    // 1899-12-30 is day 0 in the 1900 date system (absorbs the 1900 leap-year bug)
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - excel_epoch).num_days() as f64
}
