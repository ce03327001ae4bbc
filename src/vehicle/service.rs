//! Queries and aggregations over a loaded vehicle collection.

use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use super::{Color, Vehicle};
use crate::error::{Result, TallyError};

/// Fields a vehicle listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Model,
    Color,
    Price,
    Mileage,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "model" => Ok(SortKey::Model),
            "color" => Ok(SortKey::Color),
            "price" => Ok(SortKey::Price),
            "mileage" => Ok(SortKey::Mileage),
            other => Err(format!(
                "unknown sort key '{}' (expected model, color, price or mileage)",
                other
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Model => write!(f, "model"),
            SortKey::Color => write!(f, "color"),
            SortKey::Price => write!(f, "price"),
            SortKey::Mileage => write!(f, "mileage"),
        }
    }
}

/// Average, minimum and maximum of one numeric field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub avg: f64,
    pub min: u64,
    pub max: u64,
}

impl Statistics {
    fn of(values: impl Iterator<Item = u64> + Clone) -> Self {
        let count = values.clone().count();
        if count == 0 {
            return Self::default();
        }
        let sum: u128 = values.clone().map(u128::from).sum();
        Self {
            avg: sum as f64 / count as f64,
            min: values.clone().min().unwrap_or_default(),
            max: values.max().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceMileageStatistics {
    pub price: Statistics,
    pub mileage: Statistics,
}

/// Read-mostly query surface over an owned vehicle collection.
///
/// Every query returns fresh sequences of references and leaves the backing
/// order untouched. [`VehicleService::sorted_components`] is the single
/// exception: it reorders each vehicle's components in place.
#[derive(Debug, Clone, Default)]
pub struct VehicleService {
    vehicles: Vec<Vehicle>,
}

impl VehicleService {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn into_inner(self) -> Vec<Vehicle> {
        self.vehicles
    }

    /// Stable sort by an arbitrary key. Equal keys keep collection order in
    /// both directions.
    pub fn sorted_by<'a, K, F>(&'a self, key: F, descending: bool) -> Vec<&'a Vehicle>
    where
        K: Ord,
        F: Fn(&'a Vehicle) -> K,
    {
        let mut sorted: Vec<&Vehicle> = self.vehicles.iter().collect();
        if descending {
            sorted.sort_by_cached_key(|v| Reverse(key(*v)));
        } else {
            sorted.sort_by_cached_key(|v| key(*v));
        }
        sorted
    }

    pub fn sorted_by_key(&self, key: SortKey, descending: bool) -> Vec<&Vehicle> {
        match key {
            SortKey::Model => self.sorted_by(|v| v.model(), descending),
            SortKey::Color => self.sorted_by(|v| v.color().name(), descending),
            SortKey::Price => self.sorted_by(Vehicle::price, descending),
            SortKey::Mileage => self.sorted_by(Vehicle::mileage, descending),
        }
    }

    /// Vehicles with mileage strictly above `threshold`, in collection order.
    pub fn mileage_greater_than(&self, threshold: i64) -> Result<Vec<&Vehicle>> {
        if threshold < 0 {
            return Err(TallyError::invalid_argument(format!(
                "Incorrect value mileage: \"{}\" - should be integer greater or equal than 0",
                threshold
            )));
        }
        let threshold = threshold as u64;
        Ok(self
            .vehicles
            .iter()
            .filter(|v| v.mileage() > threshold)
            .collect())
    }

    /// Number of vehicles per color, ordered by count.
    ///
    /// Colors with equal counts keep the order in which they first appear.
    pub fn count_by_color(&self, descending: bool) -> Vec<(Color, usize)> {
        let mut counts: Vec<(Color, usize)> = Vec::new();
        let mut slots: HashMap<Color, usize> = HashMap::new();
        for vehicle in &self.vehicles {
            let slot = *slots.entry(vehicle.color()).or_insert_with(|| {
                counts.push((vehicle.color(), 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }
        counts.sort_by(|a, b| directed(a.1.cmp(&b.1), descending));
        counts
    }

    /// For each model, every vehicle carrying that model's highest price.
    ///
    /// Tied vehicles are all kept, in collection order. Entries are ordered
    /// by model name.
    pub fn most_expensive_by_model(&self, descending: bool) -> Vec<(String, Vec<&Vehicle>)> {
        let mut by_model: BTreeMap<&str, Vec<&Vehicle>> = BTreeMap::new();
        for vehicle in &self.vehicles {
            let best = by_model.entry(vehicle.model()).or_default();
            match best.first().map(|b| vehicle.price().cmp(&b.price())) {
                None | Some(Ordering::Equal) => best.push(vehicle),
                Some(Ordering::Greater) => *best = vec![vehicle],
                Some(Ordering::Less) => {}
            }
        }

        let entries = by_model
            .into_iter()
            .map(|(model, vehicles)| (model.to_string(), vehicles));
        if descending {
            entries.rev().collect()
        } else {
            entries.collect()
        }
    }

    /// Price and mileage statistics. All zeros for an empty collection.
    pub fn price_mileage_statistics(&self) -> PriceMileageStatistics {
        PriceMileageStatistics {
            price: Statistics::of(self.vehicles.iter().map(Vehicle::price)),
            mileage: Statistics::of(self.vehicles.iter().map(Vehicle::mileage)),
        }
    }

    /// Every vehicle sharing the highest price. Empty for an empty collection.
    pub fn most_expensive(&self) -> Vec<&Vehicle> {
        let Some(max_price) = self.vehicles.iter().map(Vehicle::price).max() else {
            return Vec::new();
        };
        self.vehicles
            .iter()
            .filter(|v| v.price() == max_price)
            .collect()
    }

    /// Sort every vehicle's components alphabetically, in place, and hand the
    /// collection back.
    pub fn sorted_components(&mut self, descending: bool) -> &[Vehicle] {
        for vehicle in &mut self.vehicles {
            vehicle.normalize_components(descending);
        }
        &self.vehicles
    }

    /// Component name -> vehicles that have it, ordered by number of vehicles.
    ///
    /// Components with equal counts keep the order in which they first appear.
    pub fn cars_by_component(&self, descending: bool) -> Vec<(String, Vec<&Vehicle>)> {
        let mut inventory: Vec<(String, Vec<&Vehicle>)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();
        for vehicle in &self.vehicles {
            for component in vehicle.components() {
                let slot = *slots.entry(component.as_str()).or_insert_with(|| {
                    inventory.push((component.clone(), Vec::new()));
                    inventory.len() - 1
                });
                inventory[slot].1.push(vehicle);
            }
        }
        inventory.sort_by(|a, b| directed(a.1.len().cmp(&b.1.len()), descending));
        inventory
    }

    /// Vehicles priced within `[low, high]`, ordered by model name.
    pub fn price_between(&self, low: i64, high: i64) -> Result<Vec<&Vehicle>> {
        if low > high {
            return Err(TallyError::invalid_argument(format!(
                "Invalid price range: {} is greater than {}",
                low, high
            )));
        }
        let mut matching: Vec<&Vehicle> = self
            .vehicles
            .iter()
            .filter(|v| {
                let price = i128::from(v.price());
                i128::from(low) <= price && price <= i128::from(high)
            })
            .collect();
        matching.sort_by(|a, b| a.model().cmp(b.model()));
        Ok(matching)
    }
}

fn directed(ordering: Ordering, descending: bool) -> Ordering {
    if descending {
        ordering.reverse()
    } else {
        ordering
    }
}
