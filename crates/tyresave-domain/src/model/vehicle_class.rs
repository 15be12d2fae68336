//! Vehicle class parameter definitions

use serde::{Deserialize, Serialize};
use tyresave_types::{ConfigError, VanClass};

/// Fuel economy and tyre cost parameters for one vehicle class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleClass {
    pub class: VanClass,
    /// Fuel economy at correct pressure (mpg)
    pub mpg_standard: f64,
    /// Fuel economy when underinflated (mpg)
    pub mpg_underinflated: f64,
    /// Tyre set replacement cost under normal wear (£)
    pub tyre_cost_standard: f64,
    /// Tyre set replacement cost with accelerated wear (£)
    pub tyre_cost_underinflated: f64,
}

impl VehicleClass {
    pub fn name(&self) -> &'static str {
        self.class.name()
    }

    /// Check the physical invariants of the parameter set
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = self.name();
        if !(self.mpg_standard > 0.0) || !(self.mpg_underinflated > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{}: fuel economy must be positive",
                name
            )));
        }
        if self.mpg_underinflated > self.mpg_standard {
            return Err(ConfigError::Invalid(format!(
                "{}: underinflated mpg {} exceeds standard mpg {}",
                name, self.mpg_underinflated, self.mpg_standard
            )));
        }
        if !(self.tyre_cost_standard >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{}: tyre cost must not be negative",
                name
            )));
        }
        if !(self.tyre_cost_underinflated >= self.tyre_cost_standard) {
            return Err(ConfigError::Invalid(format!(
                "{}: underinflated tyre cost {} is below standard cost {}",
                name, self.tyre_cost_underinflated, self.tyre_cost_standard
            )));
        }
        Ok(())
    }
}
