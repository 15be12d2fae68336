//! Catalog trait definitions

use crate::model::{GlobalAssumptions, VehicleClass};
use tyresave_types::{Error, VanClass};

/// Read-only source of vehicle class parameters
pub trait VehicleClassCatalog {
    /// Look up the parameters of a class
    fn get_parameters(&self, class: VanClass) -> Result<&VehicleClass, Error>;

    /// Assumptions shared by every class
    fn assumptions(&self) -> &GlobalAssumptions;

    /// All registered classes in display order
    fn classes(&self) -> Vec<&VehicleClass>;

    /// Look up the parameters of a class by display name or alias
    fn get_parameters_by_name(&self, class_name: &str) -> Result<&VehicleClass, Error> {
        let class: VanClass = class_name.parse()?;
        self.get_parameters(class)
    }
}
