use crate::cli::parser::Commands;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, store: &RecordStore) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        BackupLogic::backup(store, file, *compress, *force)?;
    }

    Ok(())
}
