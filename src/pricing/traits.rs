use serde::{Deserialize, Serialize};

/// Which layer of the reference data produced a base price
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// Exact brand and model pair
    ExactModel,
    /// Average for the brand
    BrandAverage,
    /// Global default when the brand is unknown
    Global,
}

/// One layer of base price reference data.
/// Layers are tried in order by [`super::PriceResolver`].
pub trait BasePriceSource: Send + Sync {
    /// Reference price for the vehicle, if this layer knows it
    fn lookup(&self, brand: &str, model: &str) -> Option<f64>;

    /// Tier reported when this layer matches
    fn tier(&self) -> PriceTier;
}
