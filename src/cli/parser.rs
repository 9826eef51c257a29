use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for activitylog
#[derive(Parser)]
#[command(
    name = "activitylog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple activity log: record dated work entries in a CSV file and see hours per day",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a second log)
    #[arg(global = true, long = "data", value_name = "CSV")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record numbers are 1-based on the command line.
fn parse_number(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("'{s}' is not a record number (1, 2, 3, ...)")),
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for invalid values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a new activity
    Add {
        #[arg(long, help = "Date of the activity (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        #[arg(long, default_value_t = 0.0, help = "Hours spent (must be > 0)")]
        hours: f64,

        #[arg(long, default_value = "", help = "Short title")]
        title: String,

        #[arg(long, default_value = "", help = "What was done")]
        description: String,
    },

    /// Edit an activity; fields not given keep their current value
    Edit {
        /// Record number as shown by `list`
        #[arg(value_parser = parse_number)]
        number: usize,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New hours")]
        hours: Option<f64>,

        #[arg(long, help = "New title")]
        title: Option<String>,

        #[arg(long, help = "New description")]
        description: Option<String>,
    },

    /// Delete an activity
    Del {
        /// Record number as shown by `list`
        #[arg(value_parser = parse_number)]
        number: usize,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List recorded activities
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Show total hours per day with a bar chart
    Summary {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,

        #[arg(long = "no-chart", help = "Only print the table")]
        no_chart: bool,
    },

    /// Print every activity as one line of plain text
    Text,

    /// Export the activity log
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the journal of changes
    Log {
        #[arg(long = "print", help = "Print every journal entry")]
        print: bool,
    },
}
