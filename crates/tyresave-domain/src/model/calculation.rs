//! Calculation result types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tyresave_types::VanClass;

/// Saving per 10,000 miles for one vehicle, split by cause
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitSaving {
    pub fuel: f64,
    pub tyre: f64,
}

impl UnitSaving {
    pub fn total(&self) -> f64 {
        self.fuel + self.tyre
    }
}

/// Outcome of aggregating a fleet against the catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// £ per 10,000 miles, for every class in the request
    pub per_class_unit_saving: BTreeMap<VanClass, f64>,
    /// £ per year, zero for classes without vehicles or mileage
    pub per_class_annual_saving: BTreeMap<VanClass, f64>,
    pub total_annual_saving: f64,
}

impl CalculationResult {
    pub fn unit_saving(&self, class: VanClass) -> Option<f64> {
        self.per_class_unit_saving.get(&class).copied()
    }

    pub fn annual_saving(&self, class: VanClass) -> Option<f64> {
        self.per_class_annual_saving.get(&class).copied()
    }

    /// Classes with a positive annual saving, paired with their unit saving
    pub fn savings_summary(&self) -> Vec<(VanClass, f64)> {
        self.per_class_annual_saving
            .iter()
            .filter(|(_, annual)| **annual > 0.0)
            .filter_map(|(class, _)| {
                self.unit_saving(*class)
                    .filter(|unit| *unit > 0.0)
                    .map(|unit| (*class, unit))
            })
            .collect()
    }

    pub fn has_savings(&self) -> bool {
        self.total_annual_saving > 0.0
    }
}
