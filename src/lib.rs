//! activitylog library root.
//! Exposes the CLI parser, the high-level run() function, and the record
//! store / activity flow used by it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use store::RecordStore;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(cfg.data_path());

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, &store),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg, &store),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, &store),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, &store),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg, &store),
        Commands::Text => cli::commands::text::handle(&cli.command, &store),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, &store),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, &store),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, &store),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once per invocation
    let mut cfg = Config::load()?;

    if let Some(custom) = &cli.data {
        cfg.data_file = custom.clone();
    }

    dispatch(&cli, &cfg)
}
