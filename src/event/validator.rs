//! Line rules for raw `name;date` event records.

use chrono::{Local, NaiveDateTime};

use super::{DateFormat, EventFactory, DEFAULT_DELIMITER};
use crate::error::{Result, TallyError};
use crate::validation::{
    FieldPattern, ValidationErrors, ValidationResult, Validator, ViolationKind,
};

/// Latin letters, Polish diacritics, digits, space and `,.?!-`.
pub const DEFAULT_EVENT_NAME_PATTERN: &str = r"^[A-Za-z0-9 ĄąĆćĘęŁłŃńÓóŚśŹźŻż,.?!-]+$";

#[derive(Debug, Clone)]
pub struct EventValidator {
    name_pattern: FieldPattern,
    date_format: DateFormat,
    delimiter: String,
    allow_past_dates: bool,
    /// Fixed "now" for past-date checks; wall clock when unset
    reference_time: Option<NaiveDateTime>,
}

impl Default for EventValidator {
    fn default() -> Self {
        Self::new(DateFormat::default())
    }
}

impl EventValidator {
    pub fn new(date_format: DateFormat) -> Self {
        Self {
            name_pattern: FieldPattern::new(DEFAULT_EVENT_NAME_PATTERN)
                .expect("default pattern compiles"),
            date_format,
            delimiter: DEFAULT_DELIMITER.to_string(),
            allow_past_dates: false,
            reference_time: None,
        }
    }

    pub fn with_name_pattern(mut self, pattern: &str) -> Result<Self> {
        self.name_pattern = FieldPattern::new(pattern)?;
        Ok(self)
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(TallyError::Config("delimiter cannot be empty".to_string()));
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    pub fn allow_past_dates(mut self, allow: bool) -> Self {
        self.allow_past_dates = allow;
        self
    }

    /// Compare dates against `now` instead of the wall clock.
    pub fn with_reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Factory that converts the lines this validator accepts.
    pub fn factory(&self) -> EventFactory {
        EventFactory::new(self.delimiter.clone(), self.date_format.clone())
    }

    fn now(&self) -> NaiveDateTime {
        self.reference_time
            .unwrap_or_else(|| Local::now().naive_local())
    }

    fn check_name(&self, name: &str, errors: &mut ValidationErrors) {
        if name.is_empty() {
            errors.add("event_name", ViolationKind::MissingField, "Empty event name");
        } else if !self.name_pattern.is_match(name) {
            errors.add(
                "event_name",
                ViolationKind::PatternMismatch,
                format!(
                    "\"{}\" does not match regex: {}",
                    name,
                    self.name_pattern.as_str()
                ),
            );
        }
    }

    fn check_date(&self, date: &str, errors: &mut ValidationErrors) {
        if date.is_empty() {
            errors.add("date", ViolationKind::MissingField, "Empty date");
            return;
        }
        match self.date_format.parse(date) {
            Err(_) => errors.add(
                "date",
                ViolationKind::FormatMismatch,
                format!("\"{}\" not in the format: {}", date, self.date_format),
            ),
            Ok(parsed) if !self.allow_past_dates && parsed < self.now() => errors.add(
                "date",
                ViolationKind::OutOfRange,
                format!("Date {} is in the past", date),
            ),
            Ok(_) => {}
        }
    }
}

impl Validator<str> for EventValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        let mut errors = ValidationErrors::default();

        let parts: Vec<&str> = line.split(self.delimiter.as_str()).collect();
        let [name, date] = parts.as_slice() else {
            errors.add(
                "format",
                ViolationKind::FormatMismatch,
                format!("Invalid format, expected \"event_name{}date\"", self.delimiter),
            );
            return errors.into();
        };

        self.check_name(name.trim(), &mut errors);
        self.check_date(date.trim(), &mut errors);

        errors.into()
    }
}

impl Validator<String> for EventValidator {
    fn validate(&self, line: &String) -> ValidationResult {
        Validator::<str>::validate(self, line.as_str())
    }
}
