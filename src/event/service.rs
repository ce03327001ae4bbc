//! Reports over a loaded, date-sorted event collection.

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use super::{DateFormat, Event, DEFAULT_DELIMITER};
use crate::error::{Result, TallyError};
use crate::source::RecordSink;

/// Date(s) with the most events and how many events each has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MostCommonDate {
    /// Formatted dates, in order of first appearance
    pub dates: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct EventService {
    events: Vec<Event>,
    delimiter: String,
}

impl EventService {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Delimiter used when writing lines back out.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Write the held events, in held order, as `name;date` lines.
    pub fn save_sorted(
        &self,
        sink: &dyn RecordSink,
        destination: &Path,
        date_format: &DateFormat,
    ) -> Result<()> {
        let lines: Vec<String> = self
            .events
            .iter()
            .map(|event| event.to_line(&self.delimiter, date_format))
            .collect();
        tracing::debug!(
            destination = %destination.display(),
            lines = lines.len(),
            "Writing sorted events"
        );
        sink.write(destination, &lines)
    }

    /// The formatted date(s) shared by the most events.
    ///
    /// Grouping happens on the formatted string, so a coarse format such as
    /// `%m-%Y` groups by month.
    pub fn most_common_date(&self, date_format: &DateFormat) -> Result<MostCommonDate> {
        if self.events.is_empty() {
            return Err(TallyError::EmptyCollection("Events"));
        }

        // First-seen order lives in `counts`; `slots` indexes into it.
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        for event in &self.events {
            let formatted = date_format.format(&event.date());
            let slot = match slots.get(&formatted) {
                Some(slot) => *slot,
                None => {
                    counts.push((formatted.clone(), 0));
                    slots.insert(formatted, counts.len() - 1);
                    counts.len() - 1
                }
            };
            counts[slot].1 += 1;
        }

        let count = counts.iter().map(|(_, n)| *n).max().unwrap_or_default();
        let dates = counts
            .into_iter()
            .filter(|(_, n)| *n == count)
            .map(|(date, _)| date)
            .collect();

        Ok(MostCommonDate { dates, count })
    }
}
