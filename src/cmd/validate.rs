//! `tally validate`: check every record and list all rejections.
//!
//! Exits with status 1 when any record is invalid.

use anyhow::Result;
use std::path::PathBuf;

use tally::config::Config;
use tally::formatters::format_inspection;
use tally::loader::{CollectionLoader, Inspection};
use tally::source::{JsonFileSource, TextFileSource};

use super::{resolve_input, EventOverrides};

pub fn cmd_validate_vehicles(
    config: &Config,
    file: Option<PathBuf>,
    key: Option<String>,
    json: bool,
) -> Result<()> {
    let file = resolve_input(file, config.vehicles.file.as_deref(), "vehicles")?;
    let key = key.unwrap_or_else(|| config.vehicles.key.clone());

    let inspection = CollectionLoader::vehicles(config.vehicles.validator()?)
        .inspect(&JsonFileSource::new(&file, &key))?;
    finish(&inspection, json)
}

pub fn cmd_validate_events(
    config: &Config,
    file: Option<PathBuf>,
    overrides: EventOverrides,
    json: bool,
) -> Result<()> {
    let file = resolve_input(file, config.events.file.as_deref(), "events")?;
    let events_config = overrides.apply(&config.events);

    let inspection = CollectionLoader::events(events_config.validator()?)
        .inspect(&TextFileSource::new(&file))?;
    finish(&inspection, json)
}

fn finish(inspection: &Inspection, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(inspection)?);
    } else {
        println!("{}", format_inspection(inspection));
    }

    if !inspection.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
