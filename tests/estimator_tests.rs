//! Integration tests for the rule-based price estimator.

use car_scout::models::{Condition, FuelType};
use car_scout::pricing::{
    confidence, estimate, BasePriceTable, BrandAverageTable, EstimateForm, EstimateInput,
    PriceEstimator, PriceTier, GLOBAL_FALLBACK_PRICE,
};

const YEAR: i32 = 2024;

fn estimator() -> PriceEstimator {
    PriceEstimator::bundled().with_current_year(YEAR)
}

// ---------------------------------------------------------------------------
// Test: worked examples
// ---------------------------------------------------------------------------

/// Exact reference price, two years old, within expected mileage.
#[test]
fn toyota_corolla_hybrid() {
    let input = EstimateInput::new("Toyota", "Corolla")
        .year(2022)
        .odometer_km(26_000)
        .fuel_type(FuelType::Hybrid)
        .condition(Condition::Excellent);

    let result = estimate(
        &input,
        &BasePriceTable::bundled(),
        &BrandAverageTable::bundled(),
        YEAR,
    );

    assert_eq!(result.base_price, 28_000.0);
    assert_eq!(result.base_tier, PriceTier::ExactModel);
    assert!((result.value - 25_794.44).abs() < 0.01, "{}", result.value);
    assert!((result.min / result.value - 0.94).abs() < 1e-9);
    assert!((result.max / result.value - 1.06).abs() < 1e-9);
}

/// Unknown brand starts from the global fallback.
#[test]
fn unknown_brand_uses_global_fallback() {
    let input = EstimateInput::new("Lada", "Niva").year(YEAR).odometer_km(0);
    let result = estimator().estimate(&input);

    assert_eq!(result.base_price, GLOBAL_FALLBACK_PRICE);
    assert_eq!(result.base_tier, PriceTier::Global);
    assert_eq!(result.value, 26_000.0);
}

#[test]
fn known_brand_unknown_model_uses_brand_average() {
    let input = EstimateInput::new("BMW", "M5").year(YEAR);
    let result = estimator().estimate(&input);
    assert_eq!(result.base_price, 31_000.0);
    assert_eq!(result.base_tier, PriceTier::BrandAverage);
}

// ---------------------------------------------------------------------------
// Test: invariants over a spread of inputs
// ---------------------------------------------------------------------------

fn sample_inputs() -> Vec<EstimateInput> {
    let vehicles = [("BMW", "320i"), ("Tesla", "Model 3"), ("Skoda", "Fabia")];
    let years = [None, Some(1950), Some(1989), Some(2005), Some(2023), Some(2030)];
    let kms = [None, Some(-1), Some(0), Some(120_000), Some(2_000_000)];
    let conditions = [None, Some(Condition::Excellent), Some(Condition::Fair)];

    let mut inputs = Vec::new();
    for (brand, model) in vehicles {
        for year in years {
            for odometer_km in kms {
                for condition in conditions {
                    inputs.push(EstimateInput {
                        brand: brand.to_string(),
                        model: model.to_string(),
                        year,
                        odometer_km,
                        fuel_type: Some(FuelType::Diesel),
                        condition,
                    });
                }
            }
        }
    }
    inputs
}

#[test]
fn range_brackets_value_and_guard_rails_hold() {
    let estimator = estimator();
    for input in sample_inputs() {
        let result = estimator.estimate(&input);
        assert!(result.min <= result.value && result.value <= result.max, "{input:?}");
        assert!((1_200.0..=250_000.0).contains(&result.value), "{input:?}");
        assert!(result.age_years <= 35);
    }
}

#[test]
fn confidence_stays_in_bounds() {
    let estimator = estimator();
    for input in sample_inputs() {
        let score = estimator.estimate(&input).confidence_percent;
        assert!((55..=96).contains(&score), "{input:?} -> {score}");
        assert!((55..=96).contains(&confidence(&input, true, YEAR)));
    }
}

#[test]
fn estimates_are_repeatable() {
    let estimator = estimator();
    for input in sample_inputs() {
        let first = estimator.estimate(&input);
        let second = estimator.estimate(&input);
        assert_eq!(first.value.to_bits(), second.value.to_bits());
        assert_eq!(first.min.to_bits(), second.min.to_bits());
        assert_eq!(first.max.to_bits(), second.max.to_bits());
        assert_eq!(first.confidence_percent, second.confidence_percent);
    }
}

// ---------------------------------------------------------------------------
// Test: boundaries
// ---------------------------------------------------------------------------

/// Anything 35 years or older depreciates exactly like a 35-year-old car.
#[test]
fn depreciation_stops_at_35_years() {
    let estimator = estimator();
    let at_cap = estimator.estimate(&EstimateInput::new("Tesla", "Model 3").year(YEAR - 35));
    let older = estimator.estimate(&EstimateInput::new("Tesla", "Model 3").year(YEAR - 60));

    assert_eq!(at_cap.age_years, 35);
    assert_eq!(older.age_years, 35);
    assert_eq!(at_cap.value, older.value);
}

/// Mileage can never take more than 35% off.
#[test]
fn mileage_penalty_is_capped() {
    let estimator = estimator();
    let clean = EstimateInput::new("Tesla", "Model 3").year(YEAR).odometer_km(0);
    let wrecked = clean.clone().odometer_km(50_000_000);

    let ratio = estimator.estimate(&wrecked).value / estimator.estimate(&clean).value;
    assert!((ratio - 0.65).abs() < 1e-9, "{ratio}");
}

// ---------------------------------------------------------------------------
// Test: form input
// ---------------------------------------------------------------------------

#[test]
fn form_with_local_labels() {
    let form = EstimateForm {
        brand: " Toyota ".to_string(),
        model: "Corolla".to_string(),
        year: "2022".to_string(),
        odometer_km: "26000".to_string(),
        fuel_type: "Υβριδικό".to_string(),
        condition: "Άριστη".to_string(),
    };
    let input = EstimateInput::from(&form);

    assert_eq!(input.brand, "Toyota");
    assert_eq!(input.year, Some(2022));
    assert_eq!(input.odometer_km, Some(26_000));
    assert_eq!(input.fuel_type, Some(FuelType::Hybrid));
    assert_eq!(input.condition, Some(Condition::Excellent));
}

/// Garbage in a numeric field degrades to "missing" instead of failing.
#[test]
fn malformed_form_fields_degrade() {
    let form = EstimateForm {
        brand: "Audi".to_string(),
        model: "A3".to_string(),
        year: "twenty".to_string(),
        odometer_km: "".to_string(),
        fuel_type: "Steam".to_string(),
        condition: "Good".to_string(),
    };
    let input = EstimateInput::from(&form);
    assert_eq!(input.year, None);
    assert_eq!(input.odometer_km, None);
    assert_eq!(input.fuel_type, None);

    let result = estimator().estimate(&input);
    assert_eq!(result.age_years, 35);
    // 78 + 10 (exact) + 2 (condition) - 14
    assert_eq!(result.confidence_percent, 76);
}
