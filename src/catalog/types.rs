use serde::{Deserialize, Serialize};

use crate::models::{Condition, FuelType, Transmission};

/// Search criteria for the showroom inventory.
///
/// Every field is optional; an all-unset criteria set matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Exact brand
    pub brand: Option<String>,
    /// Exact model, normally only set together with `brand`
    pub model: Option<String>,
    /// Oldest model year accepted (inclusive)
    pub min_year: Option<i32>,
    /// Highest odometer reading accepted (inclusive, km)
    pub max_km: Option<u32>,
    pub fuel_type: Option<FuelType>,
    pub transmission: Option<Transmission>,
    /// Weakest engine accepted (inclusive, hp)
    pub min_horsepower: Option<u32>,
    pub condition: Option<Condition>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    pub fn max_km(mut self, km: u32) -> Self {
        self.max_km = Some(km);
        self
    }

    pub fn fuel_type(mut self, fuel: FuelType) -> Self {
        self.fuel_type = Some(fuel);
        self
    }

    pub fn transmission(mut self, transmission: Transmission) -> Self {
        self.transmission = Some(transmission);
        self
    }

    pub fn min_horsepower(mut self, hp: u32) -> Self {
        self.min_horsepower = Some(hp);
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Brand filter with blank values treated as unset.
    pub(crate) fn brand_filter(&self) -> Option<&str> {
        non_blank(self.brand.as_deref())
    }

    /// Model filter with blank values treated as unset.
    pub(crate) fn model_filter(&self) -> Option<&str> {
        non_blank(self.model.as_deref())
    }

    /// True when no field constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.brand_filter().is_none()
            && self.model_filter().is_none()
            && self.min_year.is_none()
            && self.max_km.is_none()
            && self.fuel_type.is_none()
            && self.transmission.is_none()
            && self.min_horsepower.is_none()
            && self.condition.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
