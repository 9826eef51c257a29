//! Unified application error type.
//! All modules (store, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

/// A form field that failed validation on submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Hours,
    Title,
    Description,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::Hours => "hours",
            FormField::Title => "title",
            FormField::Description => "description",
        };
        f.write_str(name)
    }
}

/// Rejected form submission. Lists every offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Fill in all fields correctly (invalid: {})", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FormField>,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },

    #[error("Unexpected header in {path}: expected 'Date,Hours,Title,Description'")]
    InvalidHeader { path: String },

    // ---------------------------
    // Flow errors
    // ---------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No activity at position {position} (the log holds {len} entries)")]
    InvalidPosition { position: usize, len: usize },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
