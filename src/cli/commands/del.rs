use crate::cli::commands::{list, to_position};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ActivityFlow, FlowOutcome};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::formatting::hours_readable;

pub fn handle(cmd: &Commands, cfg: &Config, store: &RecordStore) -> AppResult<()> {
    if let Commands::Del { number, yes } = cmd {
        let position = to_position(*number);
        let mut flow = ActivityFlow::new(store);

        let current = flow.view()?;
        let record = current
            .records
            .get(position)
            .ok_or(AppError::InvalidPosition {
                position,
                len: current.records.len(),
            })?;

        let prompt = format!(
            "Delete activity #{} ({} | {} | {})? This action is irreversible.",
            number,
            record.date_label(),
            hours_readable(record.hours),
            record.title
        );

        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let view = flow.delete(position)?;

        if let Some(FlowOutcome::Deleted { record, .. }) = &view.outcome {
            success(format!("Activity '{}' removed.", record.title));
        }

        list::print_records(&view.records, cfg);
    }

    Ok(())
}
