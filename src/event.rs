//! Calendar events read from delimited `name;date` lines.

mod service;
mod validator;

pub use service::{EventService, MostCommonDate};
pub use validator::{EventValidator, DEFAULT_EVENT_NAME_PATTERN};

use chrono::format::{self, Item, Parsed, StrftimeItems};
use chrono::NaiveDateTime;
use std::fmt;

use crate::error::{Result, TallyError};
use crate::loader::EntityFactory;

pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";
pub const DEFAULT_DELIMITER: &str = ";";

/// A checked strftime-style pattern such as `%d-%m-%Y`.
///
/// Checking up front means formatting with it can never fail later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(TallyError::Config("date format cannot be empty".to_string()));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(TallyError::Config(format!(
                "invalid date format '{}'",
                pattern
            )));
        }
        Ok(Self(pattern))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse `text`. Time fields the pattern leaves out are zero, so a
    /// date-only pattern resolves to midnight and `%H` alone keeps the hour.
    pub fn parse(&self, text: &str) -> std::result::Result<NaiveDateTime, chrono::ParseError> {
        let mut parsed = Parsed::new();
        format::parse(&mut parsed, text, StrftimeItems::new(&self.0))?;
        let date = parsed.to_naive_date()?;

        if parsed.to_naive_time().is_err() {
            // Setters only fill unset fields; a parsed value makes them fail.
            let _ = parsed.set_hour(0);
            let _ = parsed.set_minute(0);
            let _ = parsed.set_second(0);
        }
        Ok(date.and_time(parsed.to_naive_time()?))
    }

    pub fn format(&self, date: &NaiveDateTime) -> String {
        date.format(&self.0).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    event_name: String,
    date: NaiveDateTime,
}

impl Event {
    /// Build an event from a line that already passed [`EventValidator`].
    pub fn from_line(line: &str, delimiter: &str, date_format: &DateFormat) -> Result<Self> {
        let (name, date) = line.split_once(delimiter).ok_or_else(|| {
            TallyError::malformed(format!("expected \"event_name{}date\": {}", delimiter, line))
        })?;
        let (name, date) = (name.trim(), date.trim());
        if name.is_empty() || date.contains(delimiter) {
            return Err(TallyError::malformed(format!(
                "expected \"event_name{}date\": {}",
                delimiter, line
            )));
        }
        let date = date_format.parse(date).map_err(|e| {
            TallyError::malformed(format!("\"{}\" not in the format {}: {}", date, date_format, e))
        })?;

        Ok(Self {
            event_name: name.to_string(),
            date,
        })
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    /// Serialize back to the line format it was read from.
    pub fn to_line(&self, delimiter: &str, date_format: &DateFormat) -> String {
        format!(
            "{}{}{}",
            self.event_name,
            delimiter,
            date_format.format(&self.date)
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Event(event_name: {}, date: {})", self.event_name, self.date)
    }
}

/// Converts validated lines into [`Event`]s.
#[derive(Debug, Clone)]
pub struct EventFactory {
    delimiter: String,
    date_format: DateFormat,
}

impl EventFactory {
    pub fn new(delimiter: impl Into<String>, date_format: DateFormat) -> Self {
        Self {
            delimiter: delimiter.into(),
            date_format,
        }
    }
}

impl Default for EventFactory {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER, DateFormat::default())
    }
}

impl EntityFactory<String> for EventFactory {
    type Entity = Event;

    fn from_record(&self, record: &String) -> Result<Event> {
        Event::from_line(record, &self.delimiter, &self.date_format)
    }
}
