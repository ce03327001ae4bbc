//! Vehicle records: entity, validation rules, conversion and aggregations.
//!
//! Raw vehicle records are JSON objects with `model`, `price`, `color`,
//! `mileage` and `components` keys. A [`Vehicle`] only exists once a record
//! passed [`VehicleValidator`].

mod color;
mod service;
mod validator;

pub use color::Color;
pub use service::{PriceMileageStatistics, SortKey, Statistics, VehicleService};
pub use validator::{VehicleValidator, DEFAULT_UPPERCASE_PATTERN};

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use crate::error::{Result, TallyError};
use crate::loader::EntityFactory;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    model: String,
    price: u64,
    color: Color,
    mileage: u64,
    components: Vec<String>,
}

impl Vehicle {
    /// Build a vehicle from a record that already passed validation.
    ///
    /// Only extracts and coerces fields; a record that slipped past the
    /// validator yields [`TallyError::MalformedInput`].
    pub fn from_record(record: &Value) -> Result<Self> {
        let object = record
            .as_object()
            .ok_or_else(|| TallyError::malformed("vehicle record is not an object"))?;

        let string_field = |name: &str| -> Result<String> {
            object
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| TallyError::malformed(format!("{} is not a string", name)))
        };
        let positive_field = |name: &str| -> Result<u64> {
            object
                .get(name)
                .and_then(Value::as_u64)
                .filter(|n| *n > 0)
                .ok_or_else(|| TallyError::malformed(format!("{} is not a positive integer", name)))
        };

        let color = string_field("color")?
            .parse::<Color>()
            .map_err(TallyError::MalformedInput)?;

        let components = object
            .get("components")
            .and_then(Value::as_array)
            .ok_or_else(|| TallyError::malformed("components is not a list"))?
            .iter()
            .map(|c| {
                c.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| TallyError::malformed("component is not a string"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            model: string_field("model")?,
            price: positive_field("price")?,
            color,
            mileage: positive_field("mileage")?,
            components,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn mileage(&self) -> u64 {
        self.mileage
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Reorder the components list alphabetically in place.
    ///
    /// This is the only mutation a vehicle allows after construction.
    pub fn normalize_components(&mut self, descending: bool) {
        if descending {
            self.components.sort_by(|a, b| b.cmp(a));
        } else {
            self.components.sort();
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Car(model: {}, price: {}, color: {}, mileage: {})",
            self.model, self.price, self.color, self.mileage
        )
    }
}

/// Converts validated JSON records into [`Vehicle`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct VehicleFactory;

impl EntityFactory<Value> for VehicleFactory {
    type Entity = Vehicle;

    fn from_record(&self, record: &Value) -> Result<Vehicle> {
        Vehicle::from_record(record)
    }
}
