use crate::models::{ActivityRecord, DayTotal};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sum hours per calendar day, earliest day first.
pub fn daily_totals(records: &[ActivityRecord]) -> Vec<DayTotal> {
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for r in records {
        *by_day.entry(r.date).or_insert(0.0) += r.hours;
    }

    by_day
        .into_iter()
        .map(|(date, total_hours)| DayTotal { date, total_hours })
        .collect()
}

pub fn grand_total(totals: &[DayTotal]) -> f64 {
    totals.iter().map(|t| t.total_hours).sum()
}
