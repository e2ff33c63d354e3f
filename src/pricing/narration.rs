//! Step-by-step progress narration shown while an estimate is "computed".
//!
//! Narration is presentation only. It never feeds into the estimate, and
//! the estimate is computed after narration finishes so the result is
//! identical with or without it.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use crate::pricing::estimator::PriceEstimator;
use crate::pricing::types::{EstimateInput, EstimateResult};

pub const ESTIMATE_STEPS: [&str; 6] = [
    "Scanning market segments…",
    "Applying depreciation curve…",
    "Normalizing mileage penalty…",
    "Adjusting fuel factor…",
    "Calibrating condition multiplier…",
    "Finalizing estimate…",
];

const STEP_DELAY_MS: u64 = 340;
const STEP_DELAY_INCREMENT_MS: u64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NarrationStep {
    pub index: usize,
    pub label: &'static str,
    /// Progress after this step, 0..=100
    pub percent: u8,
}

/// How fast narration advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pace {
    /// Pause after each step, a little longer every time
    #[default]
    Paced,
    /// Emit every step immediately
    Instant,
}

impl Pace {
    fn delay_after(self, index: usize) -> Option<Duration> {
        match self {
            Pace::Paced => Some(Duration::from_millis(
                STEP_DELAY_MS + index as u64 * STEP_DELAY_INCREMENT_MS,
            )),
            Pace::Instant => None,
        }
    }
}

/// All narration steps with their progress percentages.
pub fn steps() -> impl Iterator<Item = NarrationStep> {
    let total = ESTIMATE_STEPS.len();
    ESTIMATE_STEPS
        .iter()
        .enumerate()
        .map(move |(index, &label)| NarrationStep {
            index,
            label,
            percent: ((index + 1) as f64 / total as f64 * 100.0).round() as u8,
        })
}

/// Report each step to `on_step`, pausing between steps per `pace`.
pub async fn narrate<F>(pace: Pace, mut on_step: F)
where
    F: FnMut(NarrationStep),
{
    for step in steps() {
        on_step(step);
        if let Some(delay) = pace.delay_after(step.index) {
            tokio::time::sleep(delay).await;
        }
    }
    debug!("Narration finished");
}

/// Narrate, then compute the estimate.
pub async fn estimate_with_narration<F>(
    estimator: &PriceEstimator,
    input: &EstimateInput,
    pace: Pace,
    on_step: F,
) -> EstimateResult
where
    F: FnMut(NarrationStep),
{
    narrate(pace, on_step).await;
    estimator.estimate(input)
}
