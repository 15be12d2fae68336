//! Fixed set of vehicle class identifiers

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// Vehicle class identifier
///
/// Ordering follows van size, which is also the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VanClass {
    #[serde(rename = "Small Van")]
    SmallVan,
    #[serde(rename = "Medium Van")]
    MediumVan,
    #[serde(rename = "Large Van")]
    LargeVan,
    #[serde(rename = "Long Wheelbase Van")]
    LongWheelbaseVan,
}

impl VanClass {
    pub const ALL: [VanClass; 4] = [
        VanClass::SmallVan,
        VanClass::MediumVan,
        VanClass::LargeVan,
        VanClass::LongWheelbaseVan,
    ];

    /// Display name (e.g. "Small Van")
    pub fn name(&self) -> &'static str {
        match self {
            VanClass::SmallVan => "Small Van",
            VanClass::MediumVan => "Medium Van",
            VanClass::LargeVan => "Large Van",
            VanClass::LongWheelbaseVan => "Long Wheelbase Van",
        }
    }

    /// Short alias used on the command line and in CSV files
    pub fn alias(&self) -> &'static str {
        match self {
            VanClass::SmallVan => "small",
            VanClass::MediumVan => "medium",
            VanClass::LargeVan => "large",
            VanClass::LongWheelbaseVan => "lwb",
        }
    }

    /// Suggested average annual mileage for this class
    pub fn default_annual_miles(&self) -> f64 {
        match self {
            VanClass::SmallVan => 10_000.0,
            VanClass::MediumVan => 12_000.0,
            VanClass::LargeVan => 15_000.0,
            VanClass::LongWheelbaseVan => 20_000.0,
        }
    }
}

impl std::fmt::Display for VanClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for VanClass {
    type Err = Error;

    /// Accepts the display name or the short alias, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        VanClass::ALL
            .into_iter()
            .find(|class| {
                normalized == class.name().to_lowercase() || normalized == class.alias()
            })
            .ok_or_else(|| Error::UnknownClass(s.trim().to_string()))
    }
}
