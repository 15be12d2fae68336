//! Vehicle class catalog loader from TOML configuration

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;
use tyresave_domain::model::{Catalog, GlobalAssumptions, VehicleClass};
use tyresave_types::{ConfigError, Error, Result, VanClass};

/// Container for parsing a catalog TOML file
#[derive(Debug, Deserialize)]
struct CatalogConfig {
    assumptions: AssumptionsEntry,
    classes: Vec<ClassEntry>,
}

/// Litres per gallon is fixed, so it is rejected here rather than ignored
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AssumptionsEntry {
    tyre_lifespan_miles: f64,
}

#[derive(Debug, Deserialize)]
struct ClassEntry {
    /// Display name or alias (e.g. "Small Van", "lwb")
    class: String,
    mpg_standard: f64,
    mpg_underinflated: f64,
    tyre_cost_standard: f64,
    tyre_cost_underinflated: f64,
}

impl ClassEntry {
    fn into_vehicle_class(self) -> Result<VehicleClass> {
        let class: VanClass = self.class.parse()?;
        Ok(VehicleClass {
            class,
            mpg_standard: self.mpg_standard,
            mpg_underinflated: self.mpg_underinflated,
            tyre_cost_standard: self.tyre_cost_standard,
            tyre_cost_underinflated: self.tyre_cost_underinflated,
        })
    }
}

/// Load a catalog from a TOML file
pub fn load_catalog_from_file(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Catalog file not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to read catalog file: {}",
            e
        )))
    })?;

    debug!(path = %path.display(), "loading vehicle class catalog");
    load_catalog_from_str(&content)
}

/// Load a catalog from a TOML string
pub fn load_catalog_from_str(toml_content: &str) -> Result<Catalog> {
    let config: CatalogConfig = toml::from_str(toml_content).map_err(|e| {
        Error::Config(ConfigError::ParseError(format!(
            "Failed to parse catalog TOML: {}",
            e
        )))
    })?;

    let classes = config
        .classes
        .into_iter()
        .map(ClassEntry::into_vehicle_class)
        .collect::<Result<Vec<_>>>()?;

    let assumptions = GlobalAssumptions::new(config.assumptions.tyre_lifespan_miles);

    let catalog = Catalog::new(classes, assumptions)?;
    debug!(classes = catalog.len(), "catalog loaded");
    Ok(catalog)
}
