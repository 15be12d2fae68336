//! Fleet composition supplied per calculation request

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tyresave_types::VanClass;

/// Number of vehicles and average annual mileage for one class
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetSegment {
    pub vehicle_count: u32,
    pub annual_miles: f64,
}

impl FleetSegment {
    pub fn new(vehicle_count: u32, annual_miles: f64) -> Self {
        Self {
            vehicle_count,
            annual_miles,
        }
    }

    /// A segment contributes savings only with vehicles and mileage
    pub fn is_active(&self) -> bool {
        self.vehicle_count > 0 && self.annual_miles > 0.0
    }
}

/// Fleet segments keyed by class, in display order
pub type FleetSegments = BTreeMap<VanClass, FleetSegment>;
