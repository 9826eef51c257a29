use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ActivityFlow;
use crate::errors::AppResult;
use crate::models::ActivityRecord;
use crate::store::RecordStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{BLUE, CYAN, GREEN, paint};
use crate::utils::formatting::{bold, hours_readable};
use crate::utils::range::DateRange;

pub fn handle(cmd: &Commands, cfg: &Config, store: &RecordStore) -> AppResult<()> {
    if let Commands::List { range } = cmd {
        let bounds = DateRange::parse_opt(range.as_deref())?;
        let view = ActivityFlow::new(store).view()?;

        let numbered: Vec<(usize, &ActivityRecord)> = view
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| bounds.is_none_or(|b| b.contains(r.date)))
            .collect();

        header("Recorded activities");

        if numbered.is_empty() {
            info("No activities recorded yet.");
            return Ok(());
        }

        for (position, record) in numbered {
            print_record(position, record, cfg);
        }
    }

    Ok(())
}

/// Print the full list, numbered from 1. Used after every change so the
/// numbers on screen match the file again.
pub fn print_records(records: &[ActivityRecord], cfg: &Config) {
    println!();
    if records.is_empty() {
        info("No activities recorded yet.");
        return;
    }
    for (position, record) in records.iter().enumerate() {
        print_record(position, record, cfg);
    }
}

fn print_record(position: usize, r: &ActivityRecord, cfg: &Config) {
    println!(
        "{} {} | {} ({})",
        bold(&format!("#{:<3}", position + 1)),
        paint(&r.date_label(), BLUE),
        paint(&r.title, CYAN),
        paint(&hours_readable(r.hours), GREEN),
    );

    let options = textwrap::Options::new(cfg.wrap_width)
        .initial_indent("     ")
        .subsequent_indent("     ");
    println!("{}", textwrap::fill(&r.description, options));
}
