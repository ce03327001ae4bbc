//! `tally vehicles`: load a JSON listing and print every aggregation.

use anyhow::{Context, Result};
use std::path::PathBuf;

use tally::config::Config;
use tally::formatters::format_vehicle_report;
use tally::loader::CollectionLoader;
use tally::report::{build_vehicle_report, ReportOptions};
use tally::source::JsonFileSource;
use tally::vehicle::{SortKey, VehicleService};

use super::resolve_input;

pub struct VehiclesArgs {
    pub file: Option<PathBuf>,
    pub key: Option<String>,
    pub skip_invalid: bool,
    pub sort: SortKey,
    pub ascending: bool,
    pub mileage_above: i64,
    pub price_min: i64,
    pub price_max: i64,
    pub json: bool,
}

pub fn cmd_vehicles(config: &Config, args: VehiclesArgs) -> Result<()> {
    let file = resolve_input(args.file, config.vehicles.file.as_deref(), "vehicles")?;
    let key = args.key.unwrap_or_else(|| config.vehicles.key.clone());
    let stop = config.vehicles.stop_on_first_error && !args.skip_invalid;

    let loader =
        CollectionLoader::vehicles(config.vehicles.validator()?).stop_on_first_error(stop);
    let vehicles = loader
        .load(&JsonFileSource::new(&file, &key))
        .with_context(|| format!("Failed to load vehicles from {}", file.display()))?;

    let options = ReportOptions {
        sort_key: args.sort,
        descending: !args.ascending,
        mileage_above: args.mileage_above,
        price_min: args.price_min,
        price_max: args.price_max,
    };
    let mut service = VehicleService::new(vehicles);
    let report = build_vehicle_report(&mut service, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_vehicle_report(&report));
    }
    Ok(())
}
