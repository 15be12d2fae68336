//! CSV loader for fleet composition
//!
//! Expected columns (header required):
//! class, vehicle_count, [annual_miles]
//!
//! An empty `annual_miles` cell falls back to the suggested mileage for the class.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use tyresave_domain::model::{FleetSegment, FleetSegments};
use tyresave_types::{Error, Result, VanClass};

#[derive(Debug, Deserialize)]
struct FleetRow {
    class: String,
    vehicle_count: i64,
    #[serde(default)]
    annual_miles: Option<f64>,
}

impl FleetRow {
    fn into_segment(self) -> Result<(VanClass, FleetSegment)> {
        let class: VanClass = self.class.parse()?;

        let vehicle_count = u32::try_from(self.vehicle_count).map_err(|_| {
            Error::InvalidInput(format!(
                "{}: vehicle count must be a non-negative integer, got {}",
                class, self.vehicle_count
            ))
        })?;

        let annual_miles = self
            .annual_miles
            .unwrap_or_else(|| class.default_annual_miles());
        if !(annual_miles >= 0.0) {
            return Err(Error::InvalidInput(format!(
                "{}: annual mileage must not be negative, got {}",
                class, annual_miles
            )));
        }

        Ok((class, FleetSegment::new(vehicle_count, annual_miles)))
    }
}

/// Load fleet segments from a CSV file
pub fn load_fleet_from_csv(path: &Path) -> Result<FleetSegments> {
    if !path.exists() {
        return Err(Error::FileNotFound(format!(
            "Fleet CSV not found: {}",
            path.display()
        )));
    }
    debug!(path = %path.display(), "loading fleet CSV");
    let file = std::fs::File::open(path)?;
    load_fleet_from_reader(file)
}

/// Load fleet segments from any CSV source
pub fn load_fleet_from_reader<R: Read>(reader: R) -> Result<FleetSegments> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut segments = FleetSegments::new();
    for row in csv_reader.deserialize::<FleetRow>() {
        let (class, segment) = row?.into_segment()?;
        if segments.insert(class, segment).is_some() {
            return Err(Error::InvalidInput(format!(
                "{} listed more than once in fleet CSV",
                class
            )));
        }
        if !segment.is_active() {
            warn!(class = %class, "fleet segment has no vehicles or mileage");
        }
    }

    debug!(segments = segments.len(), "fleet CSV loaded");
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_fleet() {
        let csv = "class,vehicle_count,annual_miles\nSmall Van,12,10000\nlwb,3,22500\n";
        let segments = load_fleet_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(
            segments[&VanClass::SmallVan],
            FleetSegment::new(12, 10_000.0)
        );
        assert_eq!(
            segments[&VanClass::LongWheelbaseVan],
            FleetSegment::new(3, 22_500.0)
        );
    }

    #[test]
    fn test_default_mileage_when_blank() {
        let csv = "class,vehicle_count,annual_miles\nmedium, 4 ,\n";
        let segments = load_fleet_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(
            segments[&VanClass::MediumVan],
            FleetSegment::new(4, 12_000.0)
        );
    }

    #[test]
    fn test_comments_skipped() {
        let csv = "class,vehicle_count,annual_miles\n# depot A\nlarge,2,15000\n";
        let segments = load_fleet_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn test_unknown_class() {
        let csv = "class,vehicle_count,annual_miles\nMinibus,2,10000\n";
        let err = load_fleet_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::UnknownClass(ref name) if name == "Minibus"));
    }

    #[test]
    fn test_negative_count() {
        let csv = "class,vehicle_count,annual_miles\nsmall,-1,10000\n";
        let err = load_fleet_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_negative_miles() {
        let csv = "class,vehicle_count,annual_miles\nsmall,1,-500\n";
        let err = load_fleet_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_duplicate_class() {
        let csv = "class,vehicle_count,annual_miles\nsmall,1,1000\nSmall Van,2,2000\n";
        let err = load_fleet_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_unparsable_count() {
        let csv = "class,vehicle_count,annual_miles\nsmall,many,1000\n";
        let err = load_fleet_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "class,vehicle_count,annual_miles").unwrap();
        writeln!(file, "large,5,15000").unwrap();
        let segments = load_fleet_from_csv(file.path()).unwrap();
        assert_eq!(segments[&VanClass::LargeVan].vehicle_count, 5);
    }
}
