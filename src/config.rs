use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::catalog::FilterCriteria;
use crate::pricing::EstimateForm;

/// Default config file name, without extension.
pub const CONFIG_FILE: &str = "car_scout";

/// Run settings: defaults, then `car_scout.toml`, then `CAR_SCOUT_*`
/// environment variables (`__` separates nested keys, e.g.
/// `CAR_SCOUT_FILTER__MIN_YEAR=2020`).
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Pin the year estimates are made in; defaults to the local year
    pub current_year: Option<i32>,
    /// JSON inventory to use instead of the bundled one
    pub inventory_path: Option<PathBuf>,
    pub output_path: PathBuf,
    /// Pace the estimate narration instead of printing it at once
    pub narrate: bool,
    #[serde(default)]
    pub filter: FilterCriteria,
    pub estimate: Option<EstimateForm>,
}

impl Settings {
    pub fn new() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load(CONFIG_FILE)
    }

    /// Load from the named config file (optional) plus the environment.
    pub fn load(file: &str) -> Result<Self> {
        let builder = Config::builder()
            .set_default("output_path", "catalog_results.json")?
            .set_default("narrate", true)?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("CAR_SCOUT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let settings = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
