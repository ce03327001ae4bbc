//! Vehicle listing: JSON file to report

use crate::support::builders::{listing, VehicleRecordBuilder};

use std::fs;
use tally::loader::CollectionLoader;
use tally::report::{build_vehicle_report, ReportOptions};
use tally::source::JsonFileSource;
use tally::vehicle::{Color, SortKey, VehicleService, VehicleValidator};
use tally::TallyError;
use tempfile::TempDir;

fn write_listing(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("cars.json");
    fs::write(&path, content).expect("Failed to write listing");
    path
}

fn sample_listing() -> String {
    listing(
        "cars",
        vec![
            VehicleRecordBuilder::new("OPEL")
                .price(180)
                .mileage(5000)
                .color("RED")
                .components(&["RADIO", "ABS"])
                .build(),
            VehicleRecordBuilder::new("FIAT")
                .price(90)
                .mileage(1200)
                .color("GREEN")
                .components(&["ABS"])
                .build(),
            VehicleRecordBuilder::new("OPEL")
                .price(180)
                .mileage(2500)
                .color("RED")
                .components(&["AIR BAG"])
                .build(),
            VehicleRecordBuilder::new("AUDI")
                .price(250)
                .mileage(800)
                .color("BLACK")
                .components(&["ABS", "AIR BAG"])
                .build(),
        ],
    )
}

#[test]
fn test_load_listing_and_aggregate() {
    let dir = TempDir::new().unwrap();
    let path = write_listing(&dir, &sample_listing());

    let vehicles = CollectionLoader::vehicles(VehicleValidator::new())
        .load(&JsonFileSource::new(&path, "cars"))
        .unwrap();
    assert_eq!(vehicles.len(), 4);

    let service = VehicleService::new(vehicles);

    let by_price: Vec<u64> = service
        .sorted_by_key(SortKey::Price, true)
        .iter()
        .map(|v| v.price())
        .collect();
    assert_eq!(by_price, vec![250, 180, 180, 90]);

    let colors = service.count_by_color(true);
    assert_eq!(colors[0], (Color::Red, 2));

    let opel = service
        .most_expensive_by_model(false)
        .into_iter()
        .find(|(model, _)| model == "OPEL")
        .unwrap();
    assert_eq!(opel.1.len(), 2);

    let most_expensive = service.most_expensive();
    assert_eq!(most_expensive.len(), 1);
    assert_eq!(most_expensive[0].model(), "AUDI");

    let above: Vec<u64> = service
        .mileage_greater_than(2400)
        .unwrap()
        .iter()
        .map(|v| v.mileage())
        .collect();
    assert_eq!(above, vec![5000, 2500]);

    let window: Vec<&str> = service
        .price_between(100, 200)
        .unwrap()
        .iter()
        .map(|v| v.model())
        .collect();
    assert_eq!(window, vec!["OPEL", "OPEL"]);

    let stats = service.price_mileage_statistics();
    assert_eq!(stats.price.min, 90);
    assert_eq!(stats.price.max, 250);
    assert!((stats.price.avg - 175.0).abs() < f64::EPSILON);
}

#[test]
fn test_components_inventory_counts_each_vehicle() {
    let dir = TempDir::new().unwrap();
    let path = write_listing(&dir, &sample_listing());

    let vehicles = CollectionLoader::vehicles(VehicleValidator::new())
        .load(&JsonFileSource::new(&path, "cars"))
        .unwrap();
    let service = VehicleService::new(vehicles);

    let inventory = service.cars_by_component(true);
    let counts: Vec<(&str, usize)> = inventory
        .iter()
        .map(|(component, cars)| (component.as_str(), cars.len()))
        .collect();
    assert_eq!(counts, vec![("ABS", 3), ("AIR BAG", 2), ("RADIO", 1)]);
}

#[test]
fn test_invalid_record_aborts_by_default() {
    let dir = TempDir::new().unwrap();
    let content = listing(
        "cars",
        vec![
            VehicleRecordBuilder::new("OPEL").build(),
            VehicleRecordBuilder::new("opel").price(0).build(),
        ],
    );
    let path = write_listing(&dir, &content);

    let err = CollectionLoader::vehicles(VehicleValidator::new())
        .load(&JsonFileSource::new(&path, "cars"))
        .unwrap_err();

    let errors = err.validation_errors().expect("validation failure");
    assert!(errors.contains("model"));
    assert!(errors.contains("price"));
    assert!(!errors.contains("color"));
}

#[test]
fn test_invalid_record_skipped_when_requested() {
    let dir = TempDir::new().unwrap();
    let content = listing(
        "cars",
        vec![
            VehicleRecordBuilder::new("OPEL").build(),
            VehicleRecordBuilder::new("FIAT").color("PINK").build(),
            VehicleRecordBuilder::new("SEAT").build(),
        ],
    );
    let path = write_listing(&dir, &content);

    let vehicles = CollectionLoader::vehicles(VehicleValidator::new())
        .stop_on_first_error(false)
        .load(&JsonFileSource::new(&path, "cars"))
        .unwrap();
    let models: Vec<&str> = vehicles.iter().map(|v| v.model()).collect();
    assert_eq!(models, vec!["OPEL", "SEAT"]);
}

#[test]
fn test_missing_key_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = write_listing(&dir, &listing("autos", vec![]));

    let err = CollectionLoader::vehicles(VehicleValidator::new())
        .load(&JsonFileSource::new(&path, "cars"))
        .unwrap_err();
    assert!(matches!(err, TallyError::MissingKey { .. }));
    assert!(err.to_string().starts_with("Not found key cars in file:"));
}

#[test]
fn test_full_report_over_loaded_listing() {
    let dir = TempDir::new().unwrap();
    let path = write_listing(&dir, &sample_listing());
    let vehicles = CollectionLoader::vehicles(VehicleValidator::new())
        .load(&JsonFileSource::new(&path, "cars"))
        .unwrap();

    let mut service = VehicleService::new(vehicles);
    let report = build_vehicle_report(&mut service, &ReportOptions::default()).unwrap();

    assert_eq!(report.total, 4);
    assert_eq!(report.above_mileage.len(), 2);
    assert_eq!(report.most_expensive_by_model.len(), 3);
    assert_eq!(service.vehicles()[0].components(), ["ABS", "RADIO"]);
}
