use crate::cli::commands::{list, parse_date_arg, to_position};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{ActivityFlow, FlowOutcome};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

/// Edit an activity: start editing it, overlay the given fields on the
/// current values, then submit.
pub fn handle(cmd: &Commands, cfg: &Config, store: &RecordStore) -> AppResult<()> {
    if let Commands::Edit {
        number,
        date,
        hours,
        title,
        description,
    } = cmd
    {
        let mut flow = ActivityFlow::new(store);
        let mut form = flow.start_edit(to_position(*number))?;

        if date.is_none() && hours.is_none() && title.is_none() && description.is_none() {
            flow.cancel_edit();
            info(format!("Nothing to change for activity #{}.", number));
            return Ok(());
        }

        if let Some(d) = date {
            form.date = parse_date_arg(d)?;
        }
        if let Some(h) = hours {
            form.hours = *h;
        }
        if let Some(t) = title {
            form.title = t.clone();
        }
        if let Some(d) = description {
            form.description = d.clone();
        }

        let view = flow.submit(&form)?;

        if let Some(FlowOutcome::Edited { position }) = view.outcome {
            success(format!("Activity #{} updated.", position + 1));
        }

        list::print_records(&view.records, cfg);
    }

    Ok(())
}
