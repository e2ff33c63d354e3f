use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use car_scout::catalog::Catalog;
use car_scout::config::Settings;
use car_scout::display::{format_eur, format_km, format_range};
use car_scout::pricing::{estimate_with_narration, EstimateInput, Pace, PriceEstimator};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "car_scout=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚗 Car Scout - showroom search & price estimate");

    let settings = Settings::new().context("Failed to load settings")?;

    let catalog = match &settings.inventory_path {
        Some(path) => Catalog::from_json_file(path)
            .await
            .with_context(|| format!("Failed to load inventory from {}", path.display()))?,
        None => Catalog::bundled(),
    };
    info!("Inventory: {} vehicles", catalog.len());

    // Search
    let results = catalog.search(&settings.filter);
    info!("✅ {} of {} vehicles match\n", results.len(), catalog.len());

    for (i, vehicle) in results.iter().enumerate() {
        println!(
            "{}. {} {} ({})",
            i + 1,
            vehicle.brand,
            vehicle.model,
            format_eur(vehicle.list_price)
        );
        println!(
            "   {} • {} • {} • {}",
            vehicle.year,
            format_km(vehicle.odometer_km),
            vehicle.fuel_type,
            vehicle.transmission
        );
        println!("   {} hp, {} condition", vehicle.horsepower, vehicle.condition);
        println!("   Tag: {}  ID: #{}", vehicle.tag, vehicle.id);
        println!();
    }

    // Estimate
    let mut estimator = PriceEstimator::bundled();
    if let Some(year) = settings.current_year {
        estimator = estimator.with_current_year(year);
    }
    info!("Pricing against reference year {}", estimator.current_year());

    let estimate = match &settings.estimate {
        Some(form) => {
            let input = EstimateInput::from(form);
            if input.brand.is_empty() || input.model.is_empty() {
                warn!("Estimate requested without brand and model");
            }

            let pace = if settings.narrate {
                Pace::Paced
            } else {
                Pace::Instant
            };
            let result = estimate_with_narration(&estimator, &input, pace, |step| {
                println!("> {} [{}%]", step.label, step.percent);
            })
            .await;

            println!();
            println!("Estimated value: {}", format_eur(result.value));
            println!("Range:           {}", format_range(result.min, result.max));
            println!("Confidence:      {}%", result.confidence_percent);
            Some(json!({ "input": input, "result": result }))
        }
        None => None,
    };

    // Save results
    let output = json!({
        "criteria": settings.filter,
        "results": results,
        "estimate": estimate,
    });
    let body = serde_json::to_string_pretty(&output)?;
    tokio::fs::write(&settings.output_path, body)
        .await
        .with_context(|| format!("Failed to write {}", settings.output_path.display()))?;
    info!("💾 Saved results to {}", settings.output_path.display());

    Ok(())
}
