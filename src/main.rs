//! CLI entry point for tally.

mod cli;
mod cmd;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands, ValidateCommands};
use tally::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load()?,
    };

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tally::logging::init_tracing(&log_level)?;

    match cli.command {
        Commands::Vehicles {
            file,
            key,
            skip_invalid,
            sort,
            ascending,
            mileage_above,
            price_min,
            price_max,
            json,
        } => cmd::vehicles::cmd_vehicles(
            &config,
            cmd::vehicles::VehiclesArgs {
                file,
                key,
                skip_invalid,
                sort,
                ascending,
                mileage_above,
                price_min,
                price_max,
                json,
            },
        ),
        Commands::Events {
            file,
            output,
            date_format,
            delimiter,
            allow_past,
            skip_invalid,
            json,
        } => cmd::events::cmd_events(
            &config,
            cmd::events::EventsArgs {
                file,
                output,
                overrides: cmd::EventOverrides {
                    date_format,
                    delimiter,
                    allow_past,
                },
                skip_invalid,
                json,
            },
        ),
        Commands::Validate { command } => match command {
            ValidateCommands::Vehicles { file, key, json } => {
                cmd::validate::cmd_validate_vehicles(&config, file, key, json)
            }
            ValidateCommands::Events {
                file,
                date_format,
                delimiter,
                allow_past,
                json,
            } => cmd::validate::cmd_validate_events(
                &config,
                file,
                cmd::EventOverrides {
                    date_format,
                    delimiter,
                    allow_past,
                },
                json,
            ),
        },
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
    }
}
