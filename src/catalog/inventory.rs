use std::collections::HashSet;
use std::path::Path;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use tracing::{debug, info, warn};

use crate::catalog::filter::filter_and_rank;
use crate::catalog::types::FilterCriteria;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Condition, FuelType, Transmission, VehicleRecord};

/// Immutable showroom inventory with unique vehicle ids
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<VehicleRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting inventories that reuse an id.
    pub fn new(vehicles: Vec<VehicleRecord>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id) {
                return Err(CatalogError::DuplicateId(vehicle.id));
            }
        }
        Ok(Self { vehicles })
    }

    /// The twelve vehicles bundled with the showroom site
    pub fn bundled() -> Self {
        Self {
            vehicles: bundled_inventory(),
        }
    }

    /// Load an inventory from a JSON array of vehicle records.
    pub async fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        debug!("Reading inventory from {}", path.display());

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let vehicles: Vec<VehicleRecord> = serde_json::from_str(&raw)?;

        info!("Loaded {} vehicles from {}", vehicles.len(), path.display());
        Self::new(vehicles)
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Matching vehicles, newest and least driven first
    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&VehicleRecord> {
        filter_and_rank(&self.vehicles, criteria)
    }

    /// Distinct brands in display order
    pub fn brands(&self) -> Vec<&str> {
        sorted_unique(self.vehicles.iter().map(|v| v.brand.as_str()))
    }

    /// Distinct models of one brand in display order
    pub fn models_for(&self, brand: &str) -> Vec<&str> {
        sorted_unique(
            self.vehicles
                .iter()
                .filter(|v| v.brand == brand)
                .map(|v| v.model.as_str()),
        )
    }
}

/// Dedupe and sort in Greek collation order, as the showroom site lists
/// its options: Greek before Latin, lowercase before uppercase.
fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut out: Vec<&str> = values.filter(|v| seen.insert(*v)).collect();

    match Collator::try_new(&locale!("el").into(), CollatorOptions::new()) {
        Ok(collator) => out.sort_by(|a, b| collator.compare(a, b)),
        Err(e) => {
            warn!("Greek collation unavailable ({}), sorting by code point", e);
            out.sort_unstable();
        }
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: u32,
    brand: &str,
    model: &str,
    year: i32,
    odometer_km: u32,
    fuel_type: FuelType,
    transmission: Transmission,
    horsepower: u32,
    condition: Condition,
    list_price: f64,
    tag: &str,
) -> VehicleRecord {
    VehicleRecord {
        id,
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        odometer_km,
        fuel_type,
        transmission,
        horsepower,
        condition,
        list_price,
        tag: tag.to_string(),
    }
}

#[rustfmt::skip]
fn bundled_inventory() -> Vec<VehicleRecord> {
    use Condition::*;
    use FuelType::*;
    use Transmission::*;

    vec![
        vehicle(1, "BMW", "320i", 2019, 78_000, Gasoline, Automatic, 184, VeryGood, 26_900.0, "Sport Line"),
        vehicle(2, "Mercedes-Benz", "A200", 2020, 52_000, Gasoline, Automatic, 163, Excellent, 29_900.0, "AMG Pack"),
        vehicle(3, "Audi", "A3", 2018, 99_000, Diesel, Automatic, 150, Good, 21_900.0, "S line"),
        vehicle(4, "VW", "Golf", 2021, 41_000, Hybrid, Automatic, 204, Excellent, 27_900.0, "eHybrid"),
        vehicle(5, "Toyota", "Corolla", 2022, 26_000, Hybrid, Automatic, 184, Excellent, 26_800.0, "Hybrid"),
        vehicle(6, "Tesla", "Model 3", 2021, 68_000, Electric, Automatic, 283, VeryGood, 32_900.0, "Long Range"),
        vehicle(7, "BMW", "X1", 2017, 118_000, Diesel, Automatic, 190, Good, 22_900.0, "xDrive"),
        vehicle(8, "Audi", "Q3", 2019, 86_000, Gasoline, Automatic, 150, VeryGood, 27_900.0, "Quattro look"),
        vehicle(9, "Mercedes-Benz", "C200", 2016, 132_000, Diesel, Automatic, 136, Fair, 17_900.0, "Executive"),
        vehicle(10, "Peugeot", "3008", 2020, 70_000, Diesel, Automatic, 130, VeryGood, 24_500.0, "GT Line"),
        vehicle(11, "VW", "Tiguan", 2018, 104_000, Diesel, Manual, 150, Good, 21_900.0, "Comfort"),
        vehicle(12, "Toyota", "Yaris", 2019, 74_000, Hybrid, Automatic, 116, VeryGood, 15_900.0, "City"),
    ]
}
