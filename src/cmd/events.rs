//! `tally events`: sort an event file by date and report the busiest date.

use anyhow::{Context, Result};
use std::path::PathBuf;

use tally::config::Config;
use tally::event::EventService;
use tally::formatters::format_event_report;
use tally::loader::CollectionLoader;
use tally::report::EventReport;
use tally::source::{TextFileSink, TextFileSource};
use tally::TallyError;

use super::{resolve_input, EventOverrides};

pub struct EventsArgs {
    pub file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub overrides: EventOverrides,
    pub skip_invalid: bool,
    pub json: bool,
}

pub fn cmd_events(config: &Config, args: EventsArgs) -> Result<()> {
    let file = resolve_input(args.file, config.events.file.as_deref(), "events")?;
    let events_config = args.overrides.apply(&config.events);
    let output = args.output.unwrap_or_else(|| events_config.output.clone());
    let date_format = events_config.date_format()?;
    let stop = events_config.stop_on_first_error && !args.skip_invalid;

    let loader = CollectionLoader::events(events_config.validator()?).stop_on_first_error(stop);
    let events = loader
        .load_events(&TextFileSource::new(&file))
        .with_context(|| format!("Failed to load events from {}", file.display()))?;

    let service = EventService::new(events).with_delimiter(events_config.delimiter.clone());
    service
        .save_sorted(&TextFileSink, &output, &date_format)
        .with_context(|| format!("Failed to write sorted events to {}", output.display()))?;

    let most_common = match service.most_common_date(&date_format) {
        Ok(most_common) => Some(most_common),
        Err(TallyError::EmptyCollection(_)) => None,
        Err(e) => return Err(e.into()),
    };

    let report = EventReport {
        loaded: service.events().len(),
        output: output.display().to_string(),
        most_common,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_event_report(&report));
    }
    Ok(())
}
