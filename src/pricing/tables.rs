use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::pricing::traits::{BasePriceSource, PriceTier};

/// Base price used when neither the model nor the brand is known.
pub const GLOBAL_FALLBACK_PRICE: f64 = 26_000.0;

/// Reference prices keyed by brand and model ("good condition, new")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasePriceTable {
    prices: HashMap<String, HashMap<String, f64>>,
}

impl BasePriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, brand: impl Into<String>, model: impl Into<String>, price: f64) {
        self.prices
            .entry(brand.into())
            .or_default()
            .insert(model.into(), price);
    }

    pub fn get(&self, brand: &str, model: &str) -> Option<f64> {
        self.prices.get(brand)?.get(model).copied()
    }

    /// Reference prices shipped with the showroom site
    pub fn bundled() -> Self {
        let mut table = Self::new();
        for (brand, model, price) in [
            ("BMW", "320i", 32_000.0),
            ("BMW", "X1", 30_000.0),
            ("Mercedes-Benz", "A200", 34_000.0),
            ("Mercedes-Benz", "C200", 33_000.0),
            ("Audi", "A3", 30_000.0),
            ("Audi", "Q3", 34_000.0),
            ("VW", "Golf", 29_000.0),
            ("VW", "Tiguan", 33_000.0),
            ("Toyota", "Corolla", 28_000.0),
            ("Toyota", "Yaris", 19_000.0),
            ("Tesla", "Model 3", 42_000.0),
            ("Peugeot", "3008", 32_000.0),
        ] {
            table.insert(brand, model, price);
        }
        table
    }
}

impl BasePriceSource for BasePriceTable {
    fn lookup(&self, brand: &str, model: &str) -> Option<f64> {
        self.get(brand, model)
    }

    fn tier(&self) -> PriceTier {
        PriceTier::ExactModel
    }
}

/// Fallback reference prices per brand
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandAverageTable {
    prices: HashMap<String, f64>,
}

impl BrandAverageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, brand: impl Into<String>, price: f64) {
        self.prices.insert(brand.into(), price);
    }

    pub fn get(&self, brand: &str) -> Option<f64> {
        self.prices.get(brand).copied()
    }

    pub fn bundled() -> Self {
        let mut table = Self::new();
        for (brand, price) in [
            ("BMW", 31_000.0),
            ("Mercedes-Benz", 33_000.0),
            ("Audi", 31_500.0),
            ("VW", 28_000.0),
            ("Toyota", 24_000.0),
            ("Tesla", 41_000.0),
            ("Peugeot", 26_000.0),
        ] {
            table.insert(brand, price);
        }
        table
    }
}

impl BasePriceSource for BrandAverageTable {
    fn lookup(&self, brand: &str, _model: &str) -> Option<f64> {
        self.get(brand)
    }

    fn tier(&self) -> PriceTier {
        PriceTier::BrandAverage
    }
}

/// Layer that always answers with a fixed price
#[derive(Debug, Clone, Copy)]
pub struct GlobalFallback(pub f64);

impl Default for GlobalFallback {
    fn default() -> Self {
        Self(GLOBAL_FALLBACK_PRICE)
    }
}

impl BasePriceSource for GlobalFallback {
    fn lookup(&self, _brand: &str, _model: &str) -> Option<f64> {
        Some(self.0)
    }

    fn tier(&self) -> PriceTier {
        PriceTier::Global
    }
}

/// Base price chosen for an estimate and the layer it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedBase {
    pub price: f64,
    pub tier: PriceTier,
}

impl ResolvedBase {
    pub fn has_exact_base(&self) -> bool {
        self.tier == PriceTier::ExactModel
    }
}

/// Ordered chain of base price layers; the first hit wins.
pub struct PriceResolver<'a> {
    layers: Vec<&'a dyn BasePriceSource>,
    fallback: GlobalFallback,
}

impl<'a> PriceResolver<'a> {
    /// Resolver with no table layers, answering only the global fallback.
    pub fn empty() -> Self {
        Self {
            layers: Vec::new(),
            fallback: GlobalFallback::default(),
        }
    }

    /// Exact pair first, then brand average, then the global default.
    pub fn new(base_prices: &'a BasePriceTable, brand_averages: &'a BrandAverageTable) -> Self {
        Self::empty().with_layer(base_prices).with_layer(brand_averages)
    }

    pub fn with_layer(mut self, layer: &'a dyn BasePriceSource) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_fallback(mut self, price: f64) -> Self {
        self.fallback = GlobalFallback(price);
        self
    }

    pub fn resolve(&self, brand: &str, model: &str) -> ResolvedBase {
        for layer in &self.layers {
            if let Some(price) = layer.lookup(brand, model) {
                debug!("Base price for {} {}: {} ({:?})", brand, model, price, layer.tier());
                return ResolvedBase {
                    price,
                    tier: layer.tier(),
                };
            }
        }

        debug!("No reference price for {} {}, using {}", brand, model, self.fallback.0);
        ResolvedBase {
            price: self.fallback.0,
            tier: self.fallback.tier(),
        }
    }
}
