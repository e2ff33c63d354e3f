use chrono::{Datelike, Local};
use tracing::debug;

use crate::models::Condition;
use crate::pricing::confidence::confidence;
use crate::pricing::tables::{BasePriceTable, BrandAverageTable, PriceResolver, ResolvedBase};
use crate::pricing::types::{EstimateInput, EstimateResult};

// Depreciation curve
const FIRST_YEAR_DEPRECIATION: f64 = 0.11;
const LATER_YEAR_DEPRECIATION: f64 = 0.07;
pub const MAX_AGE_YEARS: u32 = 35;

// Mileage
const EXPECTED_KM_PER_YEAR: f64 = 15_000.0;
const PENALTY_PER_10K_KM: f64 = 0.022;
pub const MAX_MILEAGE_PENALTY: f64 = 0.35;

// Guard rails
pub const MIN_PRICE: f64 = 1_200.0;
pub const MAX_PRICE: f64 = 250_000.0;

// Range
const RANGE_BASE: f64 = 0.05;
const RANGE_PER_YEAR: f64 = 0.005;
const RANGE_FAIR_CONDITION: f64 = 0.04;
const RANGE_MIN: f64 = 0.06;
const RANGE_MAX: f64 = 0.18;

/// Age used for depreciation, clamped to `0..=MAX_AGE_YEARS`.
/// A missing year counts as the oldest possible car.
pub fn depreciation_age(year: Option<i32>, current_year: i32) -> u32 {
    match year {
        Some(year) => {
            let age = i64::from(current_year) - i64::from(year);
            age.clamp(0, i64::from(MAX_AGE_YEARS)) as u32
        }
        None => MAX_AGE_YEARS,
    }
}

/// 11% off for the first year, then 7% compounded for each further year.
pub fn depreciate(base: f64, age: u32) -> f64 {
    if age == 0 {
        return base;
    }
    let mut price = base * (1.0 - FIRST_YEAR_DEPRECIATION);
    for _ in 2..=age {
        price *= 1.0 - LATER_YEAR_DEPRECIATION;
    }
    price
}

/// Fraction of value lost to mileage above 15,000 km per year of age.
pub fn mileage_penalty(odometer_km: Option<i64>, age: u32) -> f64 {
    let expected_km = f64::from(age) * EXPECTED_KM_PER_YEAR;
    let km = odometer_km.unwrap_or(0) as f64;
    let excess_km = (km - expected_km).max(0.0);
    (excess_km / 10_000.0 * PENALTY_PER_10K_KM).clamp(0.0, MAX_MILEAGE_PENALTY)
}

/// Half-width of the estimate range as a fraction of the value.
pub fn range_fraction(age: u32, condition: Option<Condition>) -> f64 {
    let fair = if condition == Some(Condition::Fair) {
        RANGE_FAIR_CONDITION
    } else {
        0.0
    };
    (RANGE_BASE + f64::from(age) * RANGE_PER_YEAR + fair).clamp(RANGE_MIN, RANGE_MAX)
}

/// Price a vehicle from an already resolved base price.
pub fn estimate_from_base(
    input: &EstimateInput,
    base: ResolvedBase,
    current_year: i32,
) -> EstimateResult {
    let age = depreciation_age(input.year, current_year);

    let mut price = depreciate(base.price, age);
    let penalty = mileage_penalty(input.odometer_km, age);
    price *= 1.0 - penalty;
    price *= input.fuel_type.map_or(1.0, |fuel| fuel.price_factor());
    price *= input.condition.map_or(1.0, |cond| cond.price_factor());
    price = price.clamp(MIN_PRICE, MAX_PRICE);

    let spread = range_fraction(age, input.condition);

    debug!(
        "Estimate for {} {}: base {} age {} mileage penalty {:.3} -> {:.2} (±{:.3})",
        input.brand, input.model, base.price, age, penalty, price, spread
    );

    EstimateResult {
        value: price,
        min: price * (1.0 - spread),
        max: price * (1.0 + spread),
        confidence_percent: confidence(input, base.has_exact_base(), current_year),
        base_price: base.price,
        base_tier: base.tier,
        age_years: age,
    }
}

/// Estimate a vehicle's value against the given reference tables.
pub fn estimate(
    input: &EstimateInput,
    base_prices: &BasePriceTable,
    brand_averages: &BrandAverageTable,
    current_year: i32,
) -> EstimateResult {
    let base =
        PriceResolver::new(base_prices, brand_averages).resolve(&input.brand, &input.model);
    estimate_from_base(input, base, current_year)
}

/// Reference tables plus the calendar year estimates are made in
#[derive(Debug, Clone)]
pub struct PriceEstimator {
    base_prices: BasePriceTable,
    brand_averages: BrandAverageTable,
    current_year: i32,
}

impl PriceEstimator {
    /// Estimator for the current local calendar year
    pub fn new(base_prices: BasePriceTable, brand_averages: BrandAverageTable) -> Self {
        Self {
            base_prices,
            brand_averages,
            current_year: Local::now().year(),
        }
    }

    /// Estimator over the reference data shipped with the site
    pub fn bundled() -> Self {
        Self::new(BasePriceTable::bundled(), BrandAverageTable::bundled())
    }

    /// Pin the reference year, e.g. for reproducible runs
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn estimate(&self, input: &EstimateInput) -> EstimateResult {
        estimate(input, &self.base_prices, &self.brand_averages, self.current_year)
    }
}
