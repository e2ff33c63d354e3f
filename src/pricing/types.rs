use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{Condition, FuelType};
use crate::pricing::traits::PriceTier;

/// Vehicle description for a single estimate.
///
/// Numeric and categorical fields are optional so that incomplete form
/// input degrades the estimate instead of failing it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateInput {
    pub brand: String,
    pub model: String,
    /// Model year
    pub year: Option<i32>,
    /// Odometer reading in km; negative readings are treated as invalid
    pub odometer_km: Option<i64>,
    pub fuel_type: Option<FuelType>,
    pub condition: Option<Condition>,
}

impl EstimateInput {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn odometer_km(mut self, km: i64) -> Self {
        self.odometer_km = Some(km);
        self
    }

    pub fn fuel_type(mut self, fuel: FuelType) -> Self {
        self.fuel_type = Some(fuel);
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }
}

/// Raw estimator form fields, as text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateForm {
    pub brand: String,
    pub model: String,
    pub year: String,
    pub odometer_km: String,
    pub fuel_type: String,
    pub condition: String,
}

impl From<&EstimateForm> for EstimateInput {
    fn from(form: &EstimateForm) -> Self {
        Self {
            brand: form.brand.trim().to_string(),
            model: form.model.trim().to_string(),
            year: parse_number("year", &form.year),
            odometer_km: parse_number("odometer_km", &form.odometer_km),
            fuel_type: parse_label("fuel_type", &form.fuel_type),
            condition: parse_label("condition", &form.condition),
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring non-numeric {}: {:?}", field, raw);
            None
        }
    }
}

fn parse_label<T>(field: &str, raw: &str) -> Option<T>
where
    T: std::str::FromStr<Err = crate::error::CatalogError>,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}: {}", field, e);
            None
        }
    }
}

/// Price estimate with its uncertainty range
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateResult {
    /// Central estimate
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Heuristic reliability, 55..=96
    pub confidence_percent: u8,
    /// Reference price the estimate started from
    pub base_price: f64,
    pub base_tier: PriceTier,
    /// Age used for depreciation, 0..=35
    pub age_years: u32,
}
