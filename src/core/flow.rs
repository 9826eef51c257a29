//! Create / edit / delete orchestration over the record store.
//!
//! Each mutation reloads the file, applies exactly one operation, writes the
//! whole sequence back and returns a view rebuilt from what was persisted.
//! Positions in a returned view may differ from the ones used before the call.

use crate::core::calculator::daily::daily_totals;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityForm, ActivityRecord, DayTotal, EditState};
use crate::store::{RecordStore, journal, ops};
use crate::ui::messages::warning;
use crate::utils::formatting::hours_readable;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    Added { position: usize },
    Edited { position: usize },
    Deleted { position: usize, record: ActivityRecord },
}

/// What the presentation layer renders after an interaction.
#[derive(Debug, Clone)]
pub struct FlowView {
    pub outcome: Option<FlowOutcome>,
    pub records: Vec<ActivityRecord>,
    pub totals: Vec<DayTotal>,
}

pub struct ActivityFlow<'a> {
    store: &'a RecordStore,
    state: EditState,
}

impl<'a> ActivityFlow<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self {
            store,
            state: EditState::Idle,
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Current records and daily totals, without mutating anything.
    pub fn view(&self) -> AppResult<FlowView> {
        self.build_view(None)
    }

    /// Enter edit mode on `position` and return the form pre-filled with
    /// that record. Replaces any edit already in progress.
    pub fn start_edit(&mut self, position: usize) -> AppResult<ActivityForm> {
        let records = self.store.load()?;
        let record = records.get(position).ok_or(AppError::InvalidPosition {
            position,
            len: records.len(),
        })?;

        self.state = EditState::Editing(position);
        Ok(ActivityForm::from(record))
    }

    pub fn cancel_edit(&mut self) {
        self.state = EditState::Idle;
    }

    /// Validate `form`, then append it (Idle) or replace the record under
    /// edit (Editing). A rejected form leaves both state and file untouched.
    pub fn submit(&mut self, form: &ActivityForm) -> AppResult<FlowView> {
        let record = form.validate()?;
        let summary = describe(&record);
        let records = self.store.load()?;

        let (records, operation, position) = match self.state {
            EditState::Idle => {
                let position = records.len();
                (ops::append(records, record), "add", position)
            }
            EditState::Editing(position) => match ops::replace_at(records, position, record) {
                Ok(records) => (records, "edit", position),
                Err(e) => {
                    // stale slot: the file no longer has this position
                    self.state = EditState::Idle;
                    return Err(e);
                }
            },
        };

        self.store.save(&records)?;
        self.state = EditState::Idle;
        self.journal(operation, position, &summary);

        let outcome = if operation == "add" {
            FlowOutcome::Added { position }
        } else {
            FlowOutcome::Edited { position }
        };
        self.build_view(Some(outcome))
    }

    /// Remove the record at `position`. An edit in progress on the same
    /// record is cancelled; one on a later record follows it down.
    pub fn delete(&mut self, position: usize) -> AppResult<FlowView> {
        let records = self.store.load()?;
        let record = records
            .get(position)
            .cloned()
            .ok_or(AppError::InvalidPosition {
                position,
                len: records.len(),
            })?;

        let records = ops::delete_at(records, position)?;
        self.store.save(&records)?;
        self.state = self.state.after_delete(position);
        self.journal("del", position, &describe(&record));

        self.build_view(Some(FlowOutcome::Deleted { position, record }))
    }

    fn build_view(&self, outcome: Option<FlowOutcome>) -> AppResult<FlowView> {
        let records = self.store.load()?;
        let totals = daily_totals(&records);
        Ok(FlowView {
            outcome,
            records,
            totals,
        })
    }

    /// Journal failures never abort a mutation that already hit the disk.
    fn journal(&self, operation: &str, position: usize, message: &str) {
        let target = format!("#{}", position + 1);
        if let Err(e) = journal::record(&self.store.journal_path(), operation, &target, message) {
            warning(format!("Failed to write journal entry: {e}"));
        }
    }
}

fn describe(r: &ActivityRecord) -> String {
    format!("{} {} {}", r.date_str(), hours_readable(r.hours), r.title)
}
