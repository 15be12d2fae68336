//! Van specifications for the built-in catalog
//!
//! MPG figures are manufacturer averages at correct and reduced pressure;
//! tyre costs are budget estimates per set.

use tyresave_domain::model::{Catalog, GlobalAssumptions, VehicleClass};
use tyresave_types::{Result, VanClass};

/// Default diesel price (£/litre)
pub const DEFAULT_DIESEL_PRICE: f64 = 1.51;

/// Lowest diesel price accepted from the user (£/litre)
pub const MIN_DIESEL_PRICE: f64 = 0.10;

pub const DEFAULT_ASSUMPTIONS: GlobalAssumptions = GlobalAssumptions::new(20_000.0);

/// Standard van specifications
pub static VAN_SPECS: [VehicleClass; 4] = [
    VehicleClass {
        class: VanClass::SmallVan,
        mpg_standard: 54.3,
        mpg_underinflated: 51.0,
        tyre_cost_standard: 240.0,
        tyre_cost_underinflated: 283.2,
    },
    VehicleClass {
        class: VanClass::MediumVan,
        mpg_standard: 44.8,
        mpg_underinflated: 42.1,
        tyre_cost_standard: 320.0,
        tyre_cost_underinflated: 377.6,
    },
    VehicleClass {
        class: VanClass::LargeVan,
        mpg_standard: 40.9,
        mpg_underinflated: 38.4,
        tyre_cost_standard: 380.0,
        tyre_cost_underinflated: 448.4,
    },
    // Same tyres as the large van
    VehicleClass {
        class: VanClass::LongWheelbaseVan,
        mpg_standard: 32.5,
        mpg_underinflated: 30.6,
        tyre_cost_standard: 380.0,
        tyre_cost_underinflated: 448.4,
    },
];

/// Catalog built from the standard van specifications
pub fn default_catalog() -> Result<Catalog> {
    Ok(Catalog::new(VAN_SPECS.iter().cloned(), DEFAULT_ASSUMPTIONS)?)
}
