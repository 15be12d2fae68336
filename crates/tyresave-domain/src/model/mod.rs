//! Domain model types

pub mod assumptions;
pub mod calculation;
pub mod catalog;
pub mod fleet;
pub mod vehicle_class;

pub use assumptions::{GlobalAssumptions, LITRES_PER_GALLON};
pub use calculation::{CalculationResult, UnitSaving};
pub use catalog::Catalog;
pub use fleet::{FleetSegment, FleetSegments};
pub use vehicle_class::VehicleClass;
