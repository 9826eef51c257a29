use chrono::NaiveDate;
use serde::Serialize;

/// One logged activity.
///
/// Records reaching the store are always complete: non-empty title and
/// description, strictly positive hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    pub hours: f64,
    pub title: String,
    pub description: String,
}

impl ActivityRecord {
    pub fn new(
        date: NaiveDate,
        hours: f64,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            hours,
            title: title.into(),
            description: description.into(),
        }
    }

    /// ISO calendar date, the form used in the data file.
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Day/month/year, the form used for display.
    pub fn date_label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}
