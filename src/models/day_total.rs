use chrono::NaiveDate;
use serde::Serialize;

/// Total hours logged on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total_hours: f64,
}

impl DayTotal {
    pub fn label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}
