use tracing::debug;

use crate::catalog::types::FilterCriteria;
use crate::models::VehicleRecord;

/// Does `vehicle` satisfy every criterion that is set?
pub fn matches(vehicle: &VehicleRecord, criteria: &FilterCriteria) -> bool {
    if let Some(brand) = criteria.brand_filter() {
        if vehicle.brand != brand {
            return false;
        }
    }
    // Model is matched even without a brand; callers normally pair them.
    if let Some(model) = criteria.model_filter() {
        if vehicle.model != model {
            return false;
        }
    }
    if criteria.min_year.is_some_and(|min| vehicle.year < min) {
        return false;
    }
    if criteria.max_km.is_some_and(|max| vehicle.odometer_km > max) {
        return false;
    }
    if criteria.fuel_type.is_some_and(|fuel| vehicle.fuel_type != fuel) {
        return false;
    }
    if criteria
        .transmission
        .is_some_and(|trans| vehicle.transmission != trans)
    {
        return false;
    }
    if criteria
        .min_horsepower
        .is_some_and(|min| vehicle.horsepower < min)
    {
        return false;
    }
    if criteria
        .condition
        .is_some_and(|cond| vehicle.condition != cond)
    {
        return false;
    }
    true
}

/// Filter the inventory and order it newest first, then least driven.
///
/// The sort is stable, so vehicles with the same year and odometer keep
/// their inventory order.
pub fn filter_and_rank<'a>(
    inventory: &'a [VehicleRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a VehicleRecord> {
    let mut results: Vec<&VehicleRecord> = inventory
        .iter()
        .filter(|vehicle| matches(vehicle, criteria))
        .collect();

    results.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| a.odometer_km.cmp(&b.odometer_km))
    });

    debug!(
        "Filter matched {} of {} vehicles",
        results.len(),
        inventory.len()
    );
    results
}
