//! Savings calculation for correctly inflated tyres
//!
//! Every figure is a cost difference per 10,000 miles between running a
//! vehicle underinflated and at the correct pressure. Non-positive inputs
//! yield zero rather than an error.

use tyresave_types::Error;

use crate::model::{
    CalculationResult, FleetSegments, UnitSaving, VehicleClass, LITRES_PER_GALLON,
};
use crate::repository::VehicleClassCatalog;

/// Distance every unit saving is quoted against
pub const REFERENCE_MILES: f64 = 10_000.0;

/// Extra fuel cost per 10,000 miles caused by underinflation
pub fn extra_fuel_cost_per_10k(class: &VehicleClass, diesel_price_per_litre: f64) -> f64 {
    extra_fuel_cost_explicit(
        class.mpg_standard,
        class.mpg_underinflated,
        diesel_price_per_litre,
        LITRES_PER_GALLON,
    )
}

/// Extra fuel cost per 10,000 miles from explicit fuel economy figures
///
/// # Formula
/// (10000 / mpg_underinflated - 10000 / mpg_standard) x litres_per_gallon x price
///
/// Returns 0 when either economy figure or the price is not positive.
pub fn extra_fuel_cost_explicit(
    mpg_standard: f64,
    mpg_underinflated: f64,
    diesel_price_per_litre: f64,
    litres_per_gallon: f64,
) -> f64 {
    if mpg_standard <= 0.0 || mpg_underinflated <= 0.0 || diesel_price_per_litre <= 0.0 {
        return 0.0;
    }
    let fuel_cost = |mpg: f64| (REFERENCE_MILES / mpg) * litres_per_gallon * diesel_price_per_litre;
    fuel_cost(mpg_underinflated) - fuel_cost(mpg_standard)
}

/// Extra tyre cost per 10,000 miles caused by accelerated wear
///
/// The cost difference applies once per replacement cycle and is spread
/// over the standard tyre lifespan.
pub fn extra_tyre_cost_per_10k(class: &VehicleClass, lifespan_miles: f64) -> f64 {
    if lifespan_miles <= 0.0 {
        return 0.0;
    }
    let cost_diff = class.tyre_cost_underinflated - class.tyre_cost_standard;
    cost_diff / (lifespan_miles / REFERENCE_MILES)
}

/// Combined fuel and tyre saving per 10,000 miles for one class
pub fn unit_saving_per_10k<C: VehicleClassCatalog + ?Sized>(
    catalog: &C,
    class: &VehicleClass,
    diesel_price_per_litre: f64,
) -> UnitSaving {
    UnitSaving {
        fuel: extra_fuel_cost_per_10k(class, diesel_price_per_litre),
        tyre: extra_tyre_cost_per_10k(class, catalog.assumptions().tyre_lifespan_miles),
    }
}

/// Combine per-class unit savings with the fleet into annual figures
///
/// Fails with `Error::UnknownClass` when a segment names a class the
/// catalog does not hold.
pub fn aggregate<C: VehicleClassCatalog + ?Sized>(
    catalog: &C,
    segments: &FleetSegments,
    diesel_price_per_litre: f64,
) -> Result<CalculationResult, Error> {
    let mut result = CalculationResult::default();

    for (class, segment) in segments {
        let params = catalog.get_parameters(*class)?;
        let unit_saving = unit_saving_per_10k(catalog, params, diesel_price_per_litre).total();

        let annual_saving = if segment.is_active() {
            (segment.annual_miles / REFERENCE_MILES) * unit_saving * f64::from(segment.vehicle_count)
        } else {
            0.0
        };

        result.per_class_unit_saving.insert(*class, unit_saving);
        result.per_class_annual_saving.insert(*class, annual_saving);
    }

    result.total_annual_saving = result.per_class_annual_saving.values().sum();
    Ok(result)
}
