//! CLI argument definitions for tally.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use tally::vehicle::SortKey;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "Validate flat-file records and run batch reports", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n    tally vehicles cars.json --skip-invalid\n    tally events events.txt --output sorted_events.txt\n    tally validate vehicles cars.json"
)]
pub struct Cli {
    /// Path to the project config (default: .tally/config.md)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a JSON vehicle listing and print every aggregation
    Vehicles {
        /// JSON file holding the listing (falls back to vehicles.file in config)
        file: Option<PathBuf>,
        /// Key of the record array inside the JSON object
        #[arg(long)]
        key: Option<String>,
        /// Skip invalid records instead of aborting on the first one
        #[arg(long)]
        skip_invalid: bool,
        /// Sort the listing by model, color, price or mileage
        #[arg(long, default_value = "price")]
        sort: SortKey,
        /// Sort ascending instead of descending
        #[arg(long)]
        ascending: bool,
        /// Threshold for the mileage section
        #[arg(long, default_value_t = 2400, allow_negative_numbers = true)]
        mileage_above: i64,
        /// Lower bound of the price window (inclusive)
        #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
        price_min: i64,
        /// Upper bound of the price window (inclusive)
        #[arg(long, default_value_t = 200, allow_negative_numbers = true)]
        price_max: i64,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Load an event file, write it sorted by date and report the busiest date
    Events {
        /// Text file with one name;date record per line (falls back to events.file in config)
        file: Option<PathBuf>,
        /// Destination for the sorted events
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// strftime pattern of the date column, e.g. %d-%m-%Y
        #[arg(long)]
        date_format: Option<String>,
        /// Field delimiter
        #[arg(long)]
        delimiter: Option<String>,
        /// Accept events dated before now
        #[arg(long)]
        allow_past: bool,
        /// Skip invalid records instead of aborting on the first one
        #[arg(long)]
        skip_invalid: bool,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check every record of a file and list all rejected ones
    Validate {
        #[command(subcommand)]
        command: ValidateCommands,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Include commit and build date
        #[arg(long, short)]
        verbose: bool,
    },
}

#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Validate a JSON vehicle listing
    Vehicles {
        file: Option<PathBuf>,
        #[arg(long)]
        key: Option<String>,
        /// Emit rejections as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate an event file
    Events {
        file: Option<PathBuf>,
        #[arg(long)]
        date_format: Option<String>,
        #[arg(long)]
        delimiter: Option<String>,
        #[arg(long)]
        allow_past: bool,
        /// Emit rejections as JSON
        #[arg(long)]
        json: bool,
    },
}
