//! Flat-file record store: the CSV data file and its journal.

pub mod csv_store;
pub mod journal;
pub mod ops;

pub use csv_store::{HEADERS, RecordStore};
pub use ops::{append, delete_at, replace_at};
