//! Command handlers for the tally CLI

use anyhow::Result;
use std::path::{Path, PathBuf};

use tally::config::EventsConfig;

pub mod events;
pub mod util;
pub mod validate;
pub mod vehicles;

/// Pick the input file: the command-line argument wins over the config.
pub fn resolve_input(arg: Option<PathBuf>, configured: Option<&Path>, section: &str) -> Result<PathBuf> {
    match arg.or_else(|| configured.map(Path::to_path_buf)) {
        Some(path) => Ok(path),
        None => anyhow::bail!(
            "No input file given. Pass one on the command line or set {}.file in .tally/config.md",
            section
        ),
    }
}

/// Command-line overrides of the `events` config section.
#[derive(Debug, Default)]
pub struct EventOverrides {
    pub date_format: Option<String>,
    pub delimiter: Option<String>,
    pub allow_past: bool,
}

impl EventOverrides {
    pub fn apply(self, config: &EventsConfig) -> EventsConfig {
        let mut config = config.clone();
        if let Some(date_format) = self.date_format {
            config.date_format = date_format;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if self.allow_past {
            config.allow_past_dates = true;
        }
        config
    }
}
