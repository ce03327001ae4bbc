//! Event file: load, sort, write back, report

use std::fs;
use tally::event::{DateFormat, EventService, EventValidator, MostCommonDate};
use tally::loader::CollectionLoader;
use tally::source::{TextFileSink, TextFileSource};
use tally::TallyError;
use tempfile::TempDir;

fn validator() -> EventValidator {
    EventValidator::new(DateFormat::default()).allow_past_dates(true)
}

#[test]
fn test_sort_write_and_most_common_date() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.txt");
    let output = dir.path().join("sorted_events.txt");
    fs::write(&input, "B;02-01-2030\nA;01-01-2030\nA;01-01-2030\n").unwrap();

    let events = CollectionLoader::events(validator())
        .load_events(&TextFileSource::new(&input))
        .unwrap();
    let names: Vec<&str> = events.iter().map(|e| e.event_name()).collect();
    assert_eq!(names, vec!["A", "A", "B"]);

    let format = DateFormat::default();
    let service = EventService::new(events);
    service.save_sorted(&TextFileSink, &output, &format).unwrap();
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "A;01-01-2030\nA;01-01-2030\nB;02-01-2030\n"
    );

    assert_eq!(
        service.most_common_date(&format).unwrap(),
        MostCommonDate {
            dates: vec!["01-01-2030".to_string()],
            count: 2,
        }
    );
}

#[test]
fn test_written_file_loads_back_to_same_events() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.txt");
    let output = dir.path().join("sorted.txt");
    fs::write(&input, "Launch;05-03-2031\nReview;01-02-2031\n").unwrap();

    let loader = CollectionLoader::events(validator());
    let events = loader.load_events(&TextFileSource::new(&input)).unwrap();
    EventService::new(events.clone())
        .save_sorted(&TextFileSink, &output, &DateFormat::default())
        .unwrap();

    let reloaded = loader.load_events(&TextFileSource::new(&output)).unwrap();
    assert_eq!(reloaded, events);
}

#[test]
fn test_past_dates_rejected_unless_allowed() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.txt");
    fs::write(&input, "Old;01-01-2000\n").unwrap();

    let err = CollectionLoader::events(EventValidator::new(DateFormat::default()))
        .load_events(&TextFileSource::new(&input))
        .unwrap_err();
    let errors = err.validation_errors().expect("validation failure");
    assert_eq!(errors.messages("date"), vec!["Date 01-01-2000 is in the past"]);

    let events = CollectionLoader::events(validator())
        .load_events(&TextFileSource::new(&input))
        .unwrap();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_custom_delimiter_and_format() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.csv");
    fs::write(&input, "Deploy|2031-06-01\nPlan|2031-05-01\n").unwrap();

    let format = DateFormat::new("%Y-%m-%d").unwrap();
    let validator = EventValidator::new(format.clone())
        .with_delimiter("|")
        .unwrap();
    let events = CollectionLoader::events(validator)
        .load_events(&TextFileSource::new(&input))
        .unwrap();

    let lines: Vec<String> = events.iter().map(|e| e.to_line("|", &format)).collect();
    assert_eq!(lines, vec!["Plan|2031-05-01", "Deploy|2031-06-01"]);
}

#[test]
fn test_most_common_date_on_empty_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("events.txt");
    fs::write(&input, "").unwrap();

    let events = CollectionLoader::events(validator())
        .load_events(&TextFileSource::new(&input))
        .unwrap();
    let err = EventService::new(events)
        .most_common_date(&DateFormat::default())
        .unwrap_err();
    assert!(matches!(err, TallyError::EmptyCollection(_)));
    assert_eq!(err.to_string(), "Events are not found");
}
