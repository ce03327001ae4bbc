//! # Tally - record validation and batch reports
//!
//! Tally ingests flat-file records, validates every field, converts the
//! valid ones into typed entities and runs reports over the collection.
//!
//! ## Pipeline
//!
//! raw source -> [`loader::CollectionLoader`] (validator + factory per
//! record) -> typed collection -> service queries -> report
//!
//! Two record kinds are supported:
//!
//! - **Vehicles**: JSON objects under a key of a JSON document, see [`vehicle`]
//! - **Events**: `name;date` lines of a text file, see [`event`]
//!
//! ## Modules
//!
//! - [`validation`] - Shared validator contract and error map
//! - [`vehicle`] - Vehicle entity, rules and aggregations
//! - [`event`] - Event entity, rules and date reports
//! - [`source`] - Record sources and sinks (JSON, text, in-memory)
//! - [`loader`] - Validate-then-convert loading with abort/skip policy
//! - [`config`] - Project configuration (`.tally/config.md`)
//! - [`logging`] - Tracing subscriber setup
//! - [`report`] / [`formatters`] - Report snapshots and their text rendering
//!
//! ## Example
//!
//! ```no_run
//! use tally::loader::CollectionLoader;
//! use tally::source::JsonFileSource;
//! use tally::vehicle::{VehicleService, VehicleValidator};
//!
//! let loader = CollectionLoader::vehicles(VehicleValidator::new()).stop_on_first_error(false);
//! let vehicles = loader
//!     .load(&JsonFileSource::new("cars.json", "cars"))
//!     .expect("Failed to load vehicles");
//!
//! let service = VehicleService::new(vehicles);
//! for (color, count) in service.count_by_color(true) {
//!     println!("{}: {}", color, count);
//! }
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod formatters;
pub mod loader;
pub mod logging;
pub mod report;
pub mod source;
pub mod validation;
pub mod vehicle;

pub use error::{Result, TallyError};
