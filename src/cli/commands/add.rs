use crate::cli::commands::{list, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ActivityFlow, FlowOutcome};
use crate::errors::AppResult;
use crate::models::ActivityForm;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Add a new activity.
pub fn handle(cmd: &Commands, cfg: &Config, store: &RecordStore) -> AppResult<()> {
    if let Commands::Add {
        date,
        hours,
        title,
        description,
    } = cmd
    {
        let mut form = ActivityForm::default();
        if let Some(d) = date {
            form.date = parse_date_arg(d)?;
        }
        form.hours = *hours;
        form.title = title.clone();
        form.description = description.clone();

        let mut flow = ActivityFlow::new(store);
        let view = flow.submit(&form)?;

        if let Some(FlowOutcome::Added { position }) = view.outcome {
            success(format!("Activity #{} added.", position + 1));
        }

        list::print_records(&view.records, cfg);
    }

    Ok(())
}
