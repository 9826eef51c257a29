//! `--range` expressions shared by list, summary and export.
//!
//! Accepted forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, and `A:B` where both
//! ends use the same form. `all` means no filter.

use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse an optional range; `None` and `all` both mean "everything".
    pub fn parse_opt(expr: Option<&str>) -> AppResult<Option<Self>> {
        match expr.map(str::trim) {
            None => Ok(None),
            Some(r) if r.eq_ignore_ascii_case("all") => Ok(None),
            Some(r) => Self::parse(r).map(Some),
        }
    }

    pub fn parse(expr: &str) -> AppResult<Self> {
        let (start, end) = match expr.split_once(':') {
            Some((a, b)) => {
                let (a, b) = (a.trim(), b.trim());
                if a.len() != b.len() {
                    return Err(AppError::InvalidRange(format!(
                        "'{expr}': start and end must have the same format"
                    )));
                }
                (period_bounds(a)?.0, period_bounds(b)?.1)
            }
            None => period_bounds(expr.trim())?,
        };

        if start > end {
            return Err(AppError::InvalidRange(format!(
                "'{expr}': start is after end"
            )));
        }

        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Keep records inside the range, in their original order.
    pub fn filter(&self, records: &[ActivityRecord]) -> Vec<ActivityRecord> {
        records
            .iter()
            .filter(|r| self.contains(r.date))
            .cloned()
            .collect()
    }
}

/// First and last day covered by a single period expression.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidRange(format!("unsupported period '{p}'"));

    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first =
                NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
            let next_month = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            };
            let last = next_month.and_then(|d| d.pred_opt()).ok_or_else(invalid)?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
