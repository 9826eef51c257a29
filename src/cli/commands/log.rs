use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, store: &RecordStore) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(store)?;
    }

    Ok(())
}
