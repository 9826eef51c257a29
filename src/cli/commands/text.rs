use crate::cli::parser::Commands;
use crate::core::ActivityFlow;
use crate::core::text::render_text;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, store: &RecordStore) -> AppResult<()> {
    if let Commands::Text = cmd {
        let view = ActivityFlow::new(store).view()?;

        if view.records.is_empty() {
            info("No activities recorded.");
            return Ok(());
        }

        println!("{}", render_text(&view.records));
    }

    Ok(())
}
