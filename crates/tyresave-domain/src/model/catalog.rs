//! In-memory vehicle class catalog

use std::collections::BTreeMap;
use tyresave_types::{ConfigError, Error, VanClass};

use super::{GlobalAssumptions, VehicleClass};
use crate::repository::VehicleClassCatalog;

/// Validated, read-only set of class parameters
#[derive(Debug, Clone)]
pub struct Catalog {
    classes: BTreeMap<VanClass, VehicleClass>,
    assumptions: GlobalAssumptions,
}

impl Catalog {
    /// Build a catalog, rejecting parameter sets that break the class invariants
    pub fn new(
        classes: impl IntoIterator<Item = VehicleClass>,
        assumptions: GlobalAssumptions,
    ) -> Result<Self, ConfigError> {
        assumptions.validate()?;

        let mut map = BTreeMap::new();
        for class in classes {
            class.validate()?;
            if map.insert(class.class, class).is_some() {
                return Err(ConfigError::Invalid("duplicate vehicle class entry".to_string()));
            }
        }

        Ok(Self {
            classes: map,
            assumptions,
        })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl VehicleClassCatalog for Catalog {
    fn get_parameters(&self, class: VanClass) -> Result<&VehicleClass, Error> {
        self.classes
            .get(&class)
            .ok_or_else(|| Error::UnknownClass(class.name().to_string()))
    }

    fn assumptions(&self) -> &GlobalAssumptions {
        &self.assumptions
    }

    fn classes(&self) -> Vec<&VehicleClass> {
        self.classes.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn van(class: VanClass, mpg_standard: f64, mpg_underinflated: f64) -> VehicleClass {
        VehicleClass {
            class,
            mpg_standard,
            mpg_underinflated,
            tyre_cost_standard: 380.0,
            tyre_cost_underinflated: 448.4,
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(
            [van(VanClass::LargeVan, 40.9, 38.4)],
            GlobalAssumptions::new(20_000.0),
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        let params = catalog.get_parameters(VanClass::LargeVan).unwrap();
        assert_eq!(params.mpg_standard, 40.9);
    }

    #[test]
    fn test_lookup_unregistered_class() {
        let catalog = Catalog::new(
            [van(VanClass::LargeVan, 40.9, 38.4)],
            GlobalAssumptions::new(20_000.0),
        )
        .unwrap();
        let err = catalog.get_parameters(VanClass::SmallVan).unwrap_err();
        assert!(matches!(err, Error::UnknownClass(ref name) if name == "Small Van"));
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = Catalog::new(
            [van(VanClass::LongWheelbaseVan, 32.5, 30.6)],
            GlobalAssumptions::new(20_000.0),
        )
        .unwrap();
        assert!(catalog.get_parameters_by_name("Long Wheelbase Van").is_ok());
        assert!(matches!(
            catalog.get_parameters_by_name("Tractor Unit"),
            Err(Error::UnknownClass(_))
        ));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let result = Catalog::new(
            [
                van(VanClass::LargeVan, 40.9, 38.4),
                van(VanClass::LargeVan, 41.0, 38.0),
            ],
            GlobalAssumptions::new(20_000.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_entry_rejected() {
        let result = Catalog::new(
            [van(VanClass::LargeVan, 38.4, 40.9)],
            GlobalAssumptions::new(20_000.0),
        );
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_lifespan_rejected() {
        let result = Catalog::new(
            [van(VanClass::LargeVan, 40.9, 38.4)],
            GlobalAssumptions::new(0.0),
        );
        assert!(result.is_err());
    }
}
