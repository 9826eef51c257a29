//! Pure sequence operations used by the flow between load and save.

use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;

/// Add `record` at the end.
pub fn append(mut records: Vec<ActivityRecord>, record: ActivityRecord) -> Vec<ActivityRecord> {
    records.push(record);
    records
}

/// Overwrite the record at `index`.
pub fn replace_at(
    mut records: Vec<ActivityRecord>,
    index: usize,
    record: ActivityRecord,
) -> AppResult<Vec<ActivityRecord>> {
    let len = records.len();
    let slot = records.get_mut(index).ok_or(AppError::InvalidPosition {
        position: index,
        len,
    })?;
    *slot = record;
    Ok(records)
}

/// Remove the record at `index`; later records move down by one.
pub fn delete_at(
    mut records: Vec<ActivityRecord>,
    index: usize,
) -> AppResult<Vec<ActivityRecord>> {
    if index >= records.len() {
        return Err(AppError::InvalidPosition {
            position: index,
            len: records.len(),
        });
    }
    records.remove(index);
    Ok(records)
}
