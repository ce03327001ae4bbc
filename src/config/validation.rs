//! Validation of configuration values and construction of the rule sets
//! they describe.

use super::defaults::{EventsConfig, LoggingConfig, VehiclesConfig};
use super::Config;
use crate::error::{Result, TallyError};
use crate::event::{DateFormat, EventValidator};
use crate::vehicle::VehicleValidator;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Check every section; the first problem found is returned.
    pub fn validate(&self) -> Result<()> {
        self.vehicles.validate()?;
        self.events.validate()?;
        self.logging.validate()
    }
}

impl VehiclesConfig {
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(TallyError::Config("vehicles.key cannot be empty".to_string()));
        }
        self.validator().map(|_| ())
    }

    /// Validator built from the configured patterns.
    pub fn validator(&self) -> Result<VehicleValidator> {
        VehicleValidator::with_patterns(&self.model_pattern, &self.component_pattern)
    }
}

impl EventsConfig {
    pub fn validate(&self) -> Result<()> {
        self.validator().map(|_| ())
    }

    pub fn date_format(&self) -> Result<DateFormat> {
        DateFormat::new(self.date_format.clone())
    }

    /// Validator built from the configured format, delimiter and pattern.
    pub fn validator(&self) -> Result<EventValidator> {
        Ok(EventValidator::new(self.date_format()?)
            .with_delimiter(self.delimiter.clone())?
            .with_name_pattern(&self.name_pattern)?
            .allow_past_dates(self.allow_past_dates))
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(TallyError::Config(format!(
                "logging.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.level
            )));
        }
        Ok(())
    }
}
