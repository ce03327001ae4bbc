//! Report assembly over loaded collections.
//!
//! A report is an owned snapshot of every aggregation, so it can be rendered
//! as text by [`crate::formatters`] or serialized as JSON.

use serde::Serialize;

use crate::error::Result;
use crate::event::MostCommonDate;
use crate::vehicle::{Color, PriceMileageStatistics, SortKey, Vehicle, VehicleService};

/// Parameters of the vehicle report sections.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub sort_key: SortKey,
    pub descending: bool,
    pub mileage_above: i64,
    pub price_min: i64,
    pub price_max: i64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sort_key: SortKey::Price,
            descending: true,
            mileage_above: 2400,
            price_min: 100,
            price_max: 200,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorCount {
    pub color: Color,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelGroup {
    pub model: String,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentGroup {
    pub component: String,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    pub total: usize,
    pub sort_key: String,
    pub descending: bool,
    pub sorted: Vec<Vehicle>,
    pub mileage_above: i64,
    pub above_mileage: Vec<Vehicle>,
    pub color_counts: Vec<ColorCount>,
    pub most_expensive_by_model: Vec<ModelGroup>,
    pub statistics: PriceMileageStatistics,
    pub most_expensive: Vec<Vehicle>,
    pub components: Vec<ComponentGroup>,
    pub price_range: (i64, i64),
    pub in_price_range: Vec<Vehicle>,
}

fn owned(vehicles: Vec<&Vehicle>) -> Vec<Vehicle> {
    vehicles.into_iter().cloned().collect()
}

/// Run every vehicle aggregation.
///
/// Components are normalized to alphabetical order first, so listings show
/// them sorted.
pub fn build_vehicle_report(
    service: &mut VehicleService,
    options: &ReportOptions,
) -> Result<VehicleReport> {
    service.sorted_components(false);

    Ok(VehicleReport {
        total: service.len(),
        sort_key: options.sort_key.to_string(),
        descending: options.descending,
        sorted: owned(service.sorted_by_key(options.sort_key, options.descending)),
        mileage_above: options.mileage_above,
        above_mileage: owned(service.mileage_greater_than(options.mileage_above)?),
        color_counts: service
            .count_by_color(true)
            .into_iter()
            .map(|(color, count)| ColorCount { color, count })
            .collect(),
        most_expensive_by_model: service
            .most_expensive_by_model(true)
            .into_iter()
            .map(|(model, vehicles)| ModelGroup {
                model,
                vehicles: owned(vehicles),
            })
            .collect(),
        statistics: service.price_mileage_statistics(),
        most_expensive: owned(service.most_expensive()),
        components: service
            .cars_by_component(true)
            .into_iter()
            .map(|(component, vehicles)| ComponentGroup {
                component,
                vehicles: owned(vehicles),
            })
            .collect(),
        price_range: (options.price_min, options.price_max),
        in_price_range: owned(service.price_between(options.price_min, options.price_max)?),
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct EventReport {
    pub loaded: usize,
    pub output: String,
    /// None when no event survived loading
    pub most_common: Option<MostCommonDate>,
}
