use crate::pricing::types::EstimateInput;

const BASE_SCORE: f64 = 78.0;
const EXACT_BASE_BONUS: f64 = 10.0;
const RECENT_YEAR_BONUS: f64 = 4.0;
const ODOMETER_BONUS: f64 = 4.0;
const FIELD_BONUS: f64 = 2.0;

/// Model years from here on earn the recent-year bonus.
const RECENT_YEAR_FROM: i32 = 2005;
const AGE_PENALTY_PER_YEAR: f64 = 0.8;
const MAX_AGE_PENALTY: f64 = 14.0;

pub const MIN_CONFIDENCE: u8 = 55;
pub const MAX_CONFIDENCE: u8 = 96;

/// Heuristic reliability of an estimate, in percent.
///
/// Rewards complete input and an exact reference price, penalises age.
/// The age here is not capped like the depreciation age; only the
/// penalty is bounded.
pub fn confidence(input: &EstimateInput, has_exact_base: bool, current_year: i32) -> u8 {
    let mut score = BASE_SCORE;

    if has_exact_base {
        score += EXACT_BASE_BONUS;
    }
    if input.year.is_some_and(|year| year >= RECENT_YEAR_FROM) {
        score += RECENT_YEAR_BONUS;
    }
    if input.odometer_km.is_some_and(|km| km >= 0) {
        score += ODOMETER_BONUS;
    }
    if input.fuel_type.is_some() {
        score += FIELD_BONUS;
    }
    if input.condition.is_some() {
        score += FIELD_BONUS;
    }

    score -= age_penalty(input.year, current_year);

    score
        .round()
        .clamp(f64::from(MIN_CONFIDENCE), f64::from(MAX_CONFIDENCE)) as u8
}

fn age_penalty(year: Option<i32>, current_year: i32) -> f64 {
    match year {
        Some(year) => {
            let age = f64::from(current_year) - f64::from(year);
            (age * AGE_PENALTY_PER_YEAR).clamp(0.0, MAX_AGE_PENALTY)
        }
        // Unknown year behaves like a very old car.
        None => MAX_AGE_PENALTY,
    }
}
