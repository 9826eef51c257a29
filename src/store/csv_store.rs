//! CSV-backed record store.
//!
//! Every call reads or writes the whole file. Nothing is cached between
//! calls, so the file is always the source of truth.

use crate::errors::{AppError, AppResult};
use crate::models::{ActivityForm, ActivityRecord};
use crate::utils::date::parse_record_date;
use crate::utils::formatting::decimal_hours;
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs;
use std::path::{Path, PathBuf};

/// Column names of the data file, in field order.
pub const HEADERS: [&str; 4] = ["Date", "Hours", "Title", "Description"];

pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Journal file kept next to the data file (`activities.csv` → `activities.log`).
    /// A data file that already ends in `.log` gets `.log` appended instead,
    /// so the journal never lands in the data file.
    pub fn journal_path(&self) -> PathBuf {
        let sibling = self.path.with_extension("log");
        if sibling != self.path {
            return sibling;
        }
        self.suffixed(".log")
    }

    /// Create the data file with only the header row if it does not exist yet.
    /// Returns true when the file was created.
    pub fn ensure_initialized(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&[])?;
        Ok(true)
    }

    /// Load every record in file order.
    pub fn load(&self) -> AppResult<Vec<ActivityRecord>> {
        self.ensure_initialized()?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let headers = rdr.headers()?.clone();

        // 0-byte file: treat as an empty store
        if headers.is_empty() {
            return Ok(Vec::new());
        }

        if headers.iter().map(str::trim).ne(HEADERS.iter().copied()) {
            return Err(AppError::InvalidHeader {
                path: self.path.display().to_string(),
            });
        }

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);
            let record =
                parse_row(&row).map_err(|reason| AppError::InvalidRecord { line, reason })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Replace the file content with exactly `records`.
    ///
    /// Rows go to a sibling temp file which is then renamed over the data
    /// file, so a failed write leaves the previous content in place.
    pub fn save(&self, records: &[ActivityRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.tmp_path();
        let mut wtr = Writer::from_path(&tmp)?;

        wtr.write_record(HEADERS)?;
        for r in records {
            wtr.write_record([
                r.date_str(),
                decimal_hours(r.hours),
                r.title.clone(),
                r.description.clone(),
            ])?;
        }
        wtr.flush()?;
        drop(wtr);

        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// Exact bytes of the data file, for raw downloads.
    pub fn raw_content(&self) -> AppResult<Vec<u8>> {
        self.ensure_initialized()?;
        Ok(fs::read(&self.path)?)
    }

    fn tmp_path(&self) -> PathBuf {
        self.suffixed(".tmp")
    }

    fn suffixed(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }
}

fn parse_row(row: &StringRecord) -> Result<ActivityRecord, String> {
    let field = |i: usize| row.get(i).unwrap_or("");

    let date = parse_record_date(field(0)).ok_or_else(|| format!("bad date '{}'", field(0)))?;
    let hours: f64 = field(1)
        .trim()
        .parse()
        .map_err(|_| format!("bad hours '{}'", field(1)))?;

    let form = ActivityForm {
        date,
        hours,
        title: field(2).to_string(),
        description: field(3).to_string(),
    };

    form.validate().map_err(|e| e.to_string())
}
