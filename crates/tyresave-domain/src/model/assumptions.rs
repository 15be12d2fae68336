//! Process-wide calculation assumptions

use serde::{Deserialize, Serialize};
use tyresave_types::ConfigError;

/// Imperial gallon in litres
pub const LITRES_PER_GALLON: f64 = 4.54609;

/// Assumptions shared by every vehicle class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlobalAssumptions {
    /// Distance a correctly inflated tyre set lasts (miles)
    pub tyre_lifespan_miles: f64,
}

impl GlobalAssumptions {
    pub const fn new(tyre_lifespan_miles: f64) -> Self {
        Self {
            tyre_lifespan_miles,
        }
    }

    /// Unit conversion shared by every fuel cost figure; not configurable
    pub fn litres_per_gallon(&self) -> f64 {
        LITRES_PER_GALLON
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tyre_lifespan_miles > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tyre lifespan must be positive, got {}",
                self.tyre_lifespan_miles
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_imperial_gallon() {
        let a = GlobalAssumptions::new(20_000.0);
        assert_eq!(a.litres_per_gallon(), 4.54609);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn test_zero_lifespan_rejected() {
        assert!(GlobalAssumptions::new(0.0).validate().is_err());
        assert!(GlobalAssumptions::new(f64::NAN).validate().is_err());
    }
}
