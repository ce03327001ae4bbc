//! Turns a record source into a typed collection.
//!
//! Each raw record is validated, then converted. What happens to a record
//! that fails validation depends on [`LoadOptions::stop_on_first_error`]:
//! the load either aborts with [`TallyError::ValidationFailed`] or skips the
//! record and keeps going. Either way every failure is logged first.

use serde::Serialize;

use crate::error::{Result, TallyError};
use crate::event::{Event, EventFactory, EventValidator};
use crate::source::RecordSource;
use crate::validation::{ValidationErrors, Validator};
use crate::vehicle::{VehicleFactory, VehicleValidator};

/// Builds an entity from a raw record that already passed validation.
pub trait EntityFactory<R: ?Sized> {
    type Entity;

    fn from_record(&self, record: &R) -> Result<Self::Entity>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Abort on the first invalid record instead of skipping it
    pub stop_on_first_error: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            stop_on_first_error: true,
        }
    }
}

/// A record that did not pass validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based position in the source
    pub index: usize,
    pub errors: ValidationErrors,
}

/// Outcome of a validate-only pass over a source.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub source: String,
    pub checked: usize,
    pub rejections: Vec<Rejection>,
}

impl Inspection {
    pub fn is_clean(&self) -> bool {
        self.rejections.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct CollectionLoader<V, F> {
    validator: V,
    factory: F,
    options: LoadOptions,
}

impl<V, F> CollectionLoader<V, F> {
    pub fn new(validator: V, factory: F) -> Self {
        Self {
            validator,
            factory,
            options: LoadOptions::default(),
        }
    }

    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.options.stop_on_first_error = stop;
        self
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Validate and convert every record, in source order.
    pub fn load<S>(&self, source: &S) -> Result<Vec<F::Entity>>
    where
        S: RecordSource,
        V: Validator<S::Record>,
        F: EntityFactory<S::Record>,
    {
        let records = source.read()?;
        tracing::debug!(source = %source.describe(), records = records.len(), "Loading records");

        let mut entities = Vec::with_capacity(records.len());
        let mut skipped = 0usize;

        for (index, record) in records.iter().enumerate() {
            let result = self.validator.validate(record);
            if !result.is_valid {
                log_rejection(index, &result.errors);
                if self.options.stop_on_first_error {
                    return Err(TallyError::ValidationFailed {
                        index,
                        errors: result.errors,
                    });
                }
                skipped += 1;
                continue;
            }
            entities.push(self.factory.from_record(record)?);
        }

        tracing::info!(
            source = %source.describe(),
            loaded = entities.len(),
            skipped,
            "Loaded records"
        );
        Ok(entities)
    }

    /// Validate every record without converting or aborting. Rejections are
    /// listed in source order.
    pub fn inspect<S>(&self, source: &S) -> Result<Inspection>
    where
        S: RecordSource,
        V: Validator<S::Record>,
    {
        let records = source.read()?;
        let rejections: Vec<Rejection> = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let result = self.validator.validate(record);
                (!result.is_valid).then(|| {
                    log_rejection(index, &result.errors);
                    Rejection {
                        index,
                        errors: result.errors,
                    }
                })
            })
            .collect();

        tracing::info!(
            source = %source.describe(),
            checked = records.len(),
            rejected = rejections.len(),
            "Validated records"
        );
        Ok(Inspection {
            source: source.describe(),
            checked: records.len(),
            rejections,
        })
    }
}

impl CollectionLoader<VehicleValidator, VehicleFactory> {
    pub fn vehicles(validator: VehicleValidator) -> Self {
        Self::new(validator, VehicleFactory)
    }
}

impl CollectionLoader<EventValidator, EventFactory> {
    pub fn events(validator: EventValidator) -> Self {
        let factory = validator.factory();
        Self::new(validator, factory)
    }

    /// Load events and order them by date; equal dates keep file order.
    pub fn load_events<S>(&self, source: &S) -> Result<Vec<Event>>
    where
        S: RecordSource<Record = String>,
    {
        let mut events = self.load(source)?;
        events.sort_by_key(Event::date);
        Ok(events)
    }
}

fn log_rejection(index: usize, errors: &ValidationErrors) {
    for (field, violations) in errors.iter() {
        for violation in violations {
            tracing::warn!(
                record = index,
                field,
                kind = %violation.kind,
                "{} - {}",
                field,
                violation.message
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::DateFormat;
    use crate::source::InMemorySource;
    use chrono::NaiveDate;
    use serde_json::{json, Value};

    fn car(model: &str, price: i64) -> Value {
        json!({
            "model": model,
            "price": price,
            "color": "RED",
            "mileage": 100,
            "components": ["ABS"]
        })
    }

    fn events_loader() -> CollectionLoader<EventValidator, EventFactory> {
        let now = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        CollectionLoader::events(EventValidator::new(DateFormat::default()).with_reference_time(now))
    }

    fn lines(items: &[&str]) -> InMemorySource<String> {
        InMemorySource::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_load_preserves_source_order() {
        let source = InMemorySource::new(vec![car("B", 1), car("A", 2)]);
        let vehicles = CollectionLoader::vehicles(VehicleValidator::new())
            .load(&source)
            .unwrap();
        let models: Vec<&str> = vehicles.iter().map(|v| v.model()).collect();
        assert_eq!(models, vec!["B", "A"]);
    }

    #[test]
    fn test_stop_on_first_error_reports_first_failure_only() {
        let source = InMemorySource::new(vec![car("A", 1), car("b", 0), car("C", -1)]);
        let err = CollectionLoader::vehicles(VehicleValidator::new())
            .load(&source)
            .unwrap_err();

        match err {
            TallyError::ValidationFailed { index, errors } => {
                assert_eq!(index, 1);
                assert!(errors.contains("model"));
                assert!(errors.contains("price"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_skip_mode_drops_invalid_records() {
        let source = InMemorySource::new(vec![car("A", 1), car("b", 0), car("C", 3)]);
        let vehicles = CollectionLoader::vehicles(VehicleValidator::new())
            .stop_on_first_error(false)
            .load(&source)
            .unwrap();
        let models: Vec<&str> = vehicles.iter().map(|v| v.model()).collect();
        assert_eq!(models, vec!["A", "C"]);
    }

    #[test]
    fn test_inspect_collects_every_rejection() {
        let source = InMemorySource::new(vec![car("a", 1), car("B", 2), json!({})]);
        let inspection = CollectionLoader::vehicles(VehicleValidator::new())
            .inspect(&source)
            .unwrap();

        assert_eq!(inspection.checked, 3);
        assert!(!inspection.is_clean());
        let indices: Vec<usize> = inspection.rejections.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(inspection.rejections[1].errors.len(), 5);
    }

    #[test]
    fn test_events_sorted_by_date_with_stable_ties() {
        let source = lines(&["B;02-01-2030", "A;01-01-2030", "C;01-01-2030"]);
        let events = events_loader().load_events(&source).unwrap();

        let names: Vec<&str> = events.iter().map(|e| e.event_name()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_events_abort_on_malformed_line() {
        let source = lines(&["A;01-01-2030", "broken line"]);
        let err = events_loader().load_events(&source).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert!(errors.contains("format"));
    }

    #[test]
    fn test_events_skip_past_dates_when_not_stopping() {
        let source = lines(&["Old;01-01-2020", "New;01-01-2030"]);
        let events = events_loader()
            .with_options(LoadOptions {
                stop_on_first_error: false,
            })
            .load_events(&source)
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_name(), "New");
    }
}
