pub mod confidence;
pub mod estimator;
pub mod narration;
pub mod tables;
pub mod traits;
pub mod types;

pub use confidence::confidence;
pub use estimator::{estimate, estimate_from_base, PriceEstimator};
pub use narration::{estimate_with_narration, narrate, NarrationStep, Pace, ESTIMATE_STEPS};
pub use tables::{
    BasePriceTable, BrandAverageTable, GlobalFallback, PriceResolver, ResolvedBase,
    GLOBAL_FALLBACK_PRICE,
};
pub use traits::{BasePriceSource, PriceTier};
pub use types::{EstimateForm, EstimateInput, EstimateResult};
