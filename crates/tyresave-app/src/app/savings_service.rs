//! Savings calculation use case

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tyresave_domain::model::{
    CalculationResult, FleetSegment, FleetSegments, GlobalAssumptions, UnitSaving, VehicleClass,
};
use tyresave_domain::repository::VehicleClassCatalog;
use tyresave_domain::service::{aggregate, unit_saving_per_10k};
use tyresave_types::{Error, Result};

use crate::constants::MIN_DIESEL_PRICE;

/// Inputs for one savings calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRequest {
    pub diesel_price_per_litre: f64,
    pub segments: FleetSegments,
}

impl SavingsRequest {
    pub fn new(diesel_price_per_litre: f64, segments: FleetSegments) -> Self {
        Self {
            diesel_price_per_litre,
            segments,
        }
    }

    /// Reject inputs the user could not have meant
    pub fn validate(&self) -> Result<()> {
        if !(self.diesel_price_per_litre >= MIN_DIESEL_PRICE) {
            return Err(Error::InvalidInput(format!(
                "diesel price must be at least £{:.2}/litre, got {}",
                MIN_DIESEL_PRICE, self.diesel_price_per_litre
            )));
        }
        for (class, segment) in &self.segments {
            if !(segment.annual_miles >= 0.0) {
                return Err(Error::InvalidInput(format!(
                    "{}: annual mileage must not be negative, got {}",
                    class, segment.annual_miles
                )));
            }
        }
        Ok(())
    }
}

/// Request, assumptions, and result of one calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsOutcome {
    pub request: SavingsRequest,
    pub assumptions: GlobalAssumptions,
    pub result: CalculationResult,
}

/// Per-class savings per 10,000 miles at a given diesel price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassBreakdown {
    #[serde(flatten)]
    pub spec: VehicleClass,
    pub saving_per_10k: UnitSaving,
}

/// Every catalog class with no vehicles and its suggested annual mileage
pub fn default_fleet<C: VehicleClassCatalog + ?Sized>(catalog: &C) -> FleetSegments {
    catalog
        .classes()
        .into_iter()
        .map(|spec| (spec.class, FleetSegment::new(0, spec.class.default_annual_miles())))
        .collect()
}

/// Validate the request and aggregate it against the catalog
pub fn calculate_savings<C: VehicleClassCatalog + ?Sized>(
    catalog: &C,
    request: SavingsRequest,
) -> Result<SavingsOutcome> {
    request.validate()?;

    let active = request.segments.values().filter(|s| s.is_active()).count();
    debug!(
        segments = request.segments.len(),
        active,
        diesel_price = request.diesel_price_per_litre,
        "aggregating fleet"
    );

    let result = aggregate(catalog, &request.segments, request.diesel_price_per_litre)?;
    for (class, annual) in &result.per_class_annual_saving {
        debug!(class = %class, annual_saving = annual, "class saving");
    }
    info!(total = result.total_annual_saving, "savings calculated");

    Ok(SavingsOutcome {
        request,
        assumptions: *catalog.assumptions(),
        result,
    })
}

/// Saving per 10,000 miles for every catalog class
pub fn class_breakdown<C: VehicleClassCatalog + ?Sized>(
    catalog: &C,
    diesel_price_per_litre: f64,
) -> Vec<ClassBreakdown> {
    catalog
        .classes()
        .into_iter()
        .map(|spec| ClassBreakdown {
            saving_per_10k: unit_saving_per_10k(catalog, spec, diesel_price_per_litre),
            spec: spec.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_catalog;
    use tyresave_domain::model::{Catalog, GlobalAssumptions};
    use tyresave_types::VanClass;

    #[test]
    fn test_default_fleet() {
        let fleet = default_fleet(&default_catalog().unwrap());
        assert_eq!(fleet.len(), 4);
        assert!(fleet.values().all(|s| s.vehicle_count == 0));
        assert_eq!(fleet[&VanClass::LargeVan].annual_miles, 15_000.0);
    }

    #[test]
    fn test_calculate_savings() {
        let catalog = default_catalog().unwrap();
        let mut fleet = default_fleet(&catalog);
        fleet.insert(VanClass::SmallVan, FleetSegment::new(1, 10_000.0));

        let outcome = calculate_savings(&catalog, SavingsRequest::new(1.51, fleet)).unwrap();
        assert!((outcome.result.total_annual_saving - 103.40).abs() < 0.01);
        assert_eq!(outcome.result.per_class_unit_saving.len(), 4);
        assert_eq!(outcome.result.savings_summary().len(), 1);
        assert_eq!(outcome.assumptions.tyre_lifespan_miles, 20_000.0);
    }

    #[test]
    fn test_whole_fleet() {
        let catalog = default_catalog().unwrap();
        let fleet: FleetSegments = VanClass::ALL
            .into_iter()
            .map(|class| (class, FleetSegment::new(2, class.default_annual_miles())))
            .collect();

        let outcome = calculate_savings(&catalog, SavingsRequest::new(1.51, fleet)).unwrap();
        // 2 x (1.0 x 103.40 + 1.2 x 127.07 + 1.5 x 143.47 + 2.0 x 165.35)
        let expected = 2.0 * (103.401 + 1.2 * 127.069 + 1.5 * 143.470 + 2.0 * 165.349);
        assert!((outcome.result.total_annual_saving - expected).abs() < 0.05);
    }

    #[test]
    fn test_default_fleet_follows_partial_catalog() {
        let catalog = Catalog::new(
            [VehicleClass {
                class: VanClass::LargeVan,
                mpg_standard: 40.9,
                mpg_underinflated: 38.4,
                tyre_cost_standard: 380.0,
                tyre_cost_underinflated: 448.4,
            }],
            GlobalAssumptions::new(20_000.0),
        )
        .unwrap();

        let mut fleet = default_fleet(&catalog);
        assert_eq!(fleet.keys().copied().collect::<Vec<_>>(), vec![VanClass::LargeVan]);

        fleet.insert(VanClass::LargeVan, FleetSegment::new(3, 15_000.0));
        let outcome = calculate_savings(&catalog, SavingsRequest::new(1.51, fleet)).unwrap();
        assert!((outcome.result.total_annual_saving - 3.0 * 1.5 * 143.47).abs() < 0.05);
    }

    #[test]
    fn test_price_below_minimum() {
        let catalog = default_catalog().unwrap();
        let err = calculate_savings(&catalog, SavingsRequest::new(0.05, default_fleet(&catalog))).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_negative_miles_rejected() {
        let catalog = default_catalog().unwrap();
        let mut fleet = FleetSegments::new();
        fleet.insert(VanClass::MediumVan, FleetSegment::new(1, -10.0));
        let err = calculate_savings(&catalog, SavingsRequest::new(1.51, fleet)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_class_breakdown() {
        let catalog = default_catalog().unwrap();
        let breakdown = class_breakdown(&catalog, 1.51);
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[0].spec.class, VanClass::SmallVan);
        assert!((breakdown[0].saving_per_10k.total() - 103.40).abs() < 0.01);
        assert_eq!(breakdown[3].spec.class, VanClass::LongWheelbaseVan);
        assert!((breakdown[3].saving_per_10k.total() - 165.35).abs() < 0.01);
    }

    #[test]
    fn test_breakdown_json_is_flat() {
        let catalog = default_catalog().unwrap();
        let breakdown = class_breakdown(&catalog, 1.51);
        let json = serde_json::to_value(&breakdown[1]).unwrap();
        assert_eq!(json["class"], "Medium Van");
        assert!(json["saving_per_10k"]["tyre"].as_f64().unwrap() > 28.0);
    }
}
