use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{RecordStore, journal};
use crate::ui::messages::{info, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the CSV data file with its header row, if missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.as_deref(), cli.test)?;
    let store = RecordStore::new(cfg.data_path());

    println!("⚙️  Initializing activitylog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data file   : {}", store.path().display());

    if store.ensure_initialized()? {
        if let Err(e) = journal::record(
            &store.journal_path(),
            "init",
            "",
            &format!("Data file created at {}", store.path().display()),
        ) {
            warning(format!("Failed to write journal entry: {e}"));
        }
        println!("✅ Data file created at {}", store.path().display());
    } else {
        info("Data file already present, left untouched.");
    }

    println!("🎉 activitylog initialization completed!");
    Ok(())
}
