use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ActivityFlow;
use crate::core::calculator::daily::{daily_totals, grand_total};
use crate::errors::AppResult;
use crate::models::DayTotal;
use crate::store::RecordStore;
use crate::ui::chart::render_bar_chart;
use crate::ui::messages::{header, info};
use crate::utils::formatting::hours_readable;
use crate::utils::range::DateRange;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, store: &RecordStore) -> AppResult<()> {
    if let Commands::Summary { range, no_chart } = cmd {
        let bounds = DateRange::parse_opt(range.as_deref())?;
        let view = ActivityFlow::new(store).view()?;

        let totals = match bounds {
            Some(b) => daily_totals(&b.filter(&view.records)),
            None => view.totals,
        };

        header("Total hours per day");

        if totals.is_empty() {
            info("No activities recorded to compute hours.");
            return Ok(());
        }

        print!("{}", totals_table(&totals).render());
        println!("\nTotal: {}", hours_readable(grand_total(&totals)));

        if !*no_chart {
            println!("\n{}", render_bar_chart(&totals, cfg.chart_width, &cfg.bar_char));
        }
    }

    Ok(())
}

fn totals_table(totals: &[DayTotal]) -> Table {
    let mut table = Table::new(vec![Column::left("Date"), Column::right("Total hours")]);
    for t in totals {
        table.add_row(vec![t.label(), hours_readable(t.total_hours)]);
    }
    table
}
