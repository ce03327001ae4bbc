//! End-to-end runs of the tally binary

use crate::support::builders::{listing, VehicleRecordBuilder};
use crate::support::harness::{stderr, stdout, TestHarness};

#[test]
fn test_vehicles_command_prints_report() {
    let harness = TestHarness::new();
    harness.write_file(
        "cars.json",
        &listing(
            "cars",
            vec![
                VehicleRecordBuilder::new("SEAT").price(120).mileage(5000).build(),
                VehicleRecordBuilder::new("FIAT").price(90).build(),
            ],
        ),
    );

    let output = harness.run(&["vehicles", "cars.json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Vehicles (2)"));
    assert!(text.contains("Car(model: SEAT, price: 120, color: GREEN, mileage: 5000)"));
}

#[test]
fn test_vehicles_command_json_output() {
    let harness = TestHarness::new();
    harness.write_file(
        "cars.json",
        &listing("cars", vec![VehicleRecordBuilder::new("SEAT").build()]),
    );

    let output = harness.run(&["vehicles", "cars.json", "--json", "--sort", "model"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["total"], 1);
    assert_eq!(report["sort_key"], "model");
}

#[test]
fn test_vehicles_command_fails_on_invalid_record() {
    let harness = TestHarness::new();
    harness.write_file(
        "cars.json",
        &listing("cars", vec![VehicleRecordBuilder::new("seat").build()]),
    );

    let output = harness.run(&["vehicles", "cars.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Validation error in record 0"));
}

#[test]
fn test_events_command_uses_config_defaults() {
    let harness = TestHarness::with_config("events:\n  file: events.txt\n  output: out.txt\n");
    harness.write_file("events.txt", "B;02-01-2099\nA;01-01-2099\n");

    let output = harness.run(&["events"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Most common date: 01-01-2099, 02-01-2099 (1 events)"));
    assert_eq!(harness.read_file("out.txt"), "A;01-01-2099\nB;02-01-2099\n");
}

#[test]
fn test_validate_lists_all_rejections() {
    let harness = TestHarness::new();
    harness.write_file("events.txt", "Good;01-01-2099\nno delimiter\nBad@Name;01-01-2099\n");

    let output = harness.run(&["validate", "events", "events.txt"]);
    assert_eq!(output.status.code(), Some(1));

    let text = stdout(&output);
    assert!(text.contains("2 of 3 records invalid"));
    assert!(text.contains("record 1"));
    assert!(text.contains("record 2"));
}

#[test]
fn test_missing_input_file_is_an_error() {
    let harness = TestHarness::new();
    let output = harness.run(&["vehicles"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("No input file given"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let harness = TestHarness::with_config("logging:\n  level: loud\n");
    let output = harness.run(&["version"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("logging.level"));
}
