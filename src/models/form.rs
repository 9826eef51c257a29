use super::record::ActivityRecord;
use crate::errors::{FormField, ValidationError};
use crate::utils::date;
use chrono::NaiveDate;

/// Values submitted by the presentation layer for an add or an edit.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    pub date: NaiveDate,
    pub hours: f64,
    pub title: String,
    pub description: String,
}

impl Default for ActivityForm {
    /// Blank form: today, zero hours, empty texts.
    fn default() -> Self {
        Self {
            date: date::today(),
            hours: 0.0,
            title: String::new(),
            description: String::new(),
        }
    }
}

impl From<&ActivityRecord> for ActivityForm {
    fn from(r: &ActivityRecord) -> Self {
        Self {
            date: r.date,
            hours: r.hours,
            title: r.title.clone(),
            description: r.description.clone(),
        }
    }
}

impl ActivityForm {
    /// Check the form and turn it into a storable record.
    ///
    /// Title and description must contain something other than whitespace;
    /// hours must be finite and strictly positive.
    pub fn validate(&self) -> Result<ActivityRecord, ValidationError> {
        let mut fields = Vec::new();

        if !(self.hours.is_finite() && self.hours > 0.0) {
            fields.push(FormField::Hours);
        }
        if self.title.trim().is_empty() {
            fields.push(FormField::Title);
        }
        if self.description.trim().is_empty() {
            fields.push(FormField::Description);
        }

        if !fields.is_empty() {
            return Err(ValidationError { fields });
        }

        Ok(ActivityRecord::new(
            self.date,
            self.hours,
            self.title.clone(),
            self.description.clone(),
        ))
    }
}
