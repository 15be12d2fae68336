//! Command handlers

use crate::cli::{Cli, Commands, FleetArg, FleetArgs};
use crate::output::{output_classes, output_savings};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tyresave_app::app::{
    calculate_savings, class_breakdown, default_fleet, SavingsOutcome, SavingsRequest,
};
use tyresave_app::config::Config;
use tyresave_app::constants::MIN_DIESEL_PRICE;
use tyresave_app::export::export_to_excel;
use tyresave_app::repository::open_catalog;
use tyresave_domain::model::{Catalog, FleetSegment, FleetSegments};
use tyresave_infra::fleet_csv::load_fleet_from_csv;
use tyresave_types::{Error, OutputFormat, Result, VanClass};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    let catalog_override = cli.catalog.as_deref();

    match &cli.command {
        Commands::Calculate { fleet } => {
            let outcome = run_calculation(&config, catalog_override, fleet)?;
            output_savings(output_format, &outcome)
        }

        Commands::Classes { diesel_price } => {
            cmd_classes(&config, catalog_override, *diesel_price, output_format)
        }

        Commands::Export { fleet, output } => {
            cmd_export(&config, catalog_override, fleet, output.clone())
        }

        Commands::Config {
            show,
            set_diesel_price,
            set_output,
            set_catalog,
            clear_catalog,
            reset,
        } => cmd_config(
            *show,
            *set_diesel_price,
            *set_output,
            set_catalog.clone(),
            *clear_catalog,
            *reset,
        ),
    }
}

fn run_calculation(
    config: &Config,
    catalog_override: Option<&Path>,
    args: &FleetArgs,
) -> Result<SavingsOutcome> {
    let catalog = open_catalog(config, catalog_override)?;
    let diesel_price = args.diesel_price.unwrap_or(config.diesel_price_per_litre);
    let segments = build_fleet(&catalog, args)?;

    if !segments.values().any(|s| s.is_active()) {
        warn!("no vehicle class has both a count and a mileage");
    }

    calculate_savings(&catalog, SavingsRequest::new(diesel_price, segments))
}

/// Merge suggested defaults, the fleet CSV, and per-class flags (later wins)
///
/// Defaults cover only the classes the catalog registers; classes named in
/// the CSV or by a flag are always kept so an unregistered one is reported.
fn build_fleet(catalog: &Catalog, args: &FleetArgs) -> Result<FleetSegments> {
    let mut segments = default_fleet(catalog);

    if let Some(ref path) = args.fleet {
        let from_csv = load_fleet_from_csv(path)?;
        debug!(classes = from_csv.len(), "fleet loaded from CSV");
        segments.extend(from_csv);
    }

    let flags = [
        (VanClass::SmallVan, args.small),
        (VanClass::MediumVan, args.medium),
        (VanClass::LargeVan, args.large),
        (VanClass::LongWheelbaseVan, args.lwb),
    ];
    for (class, arg) in flags {
        if let Some(FleetArg { count, miles }) = arg {
            let current = segments.get(&class).copied().unwrap_or_default();
            let annual_miles = miles.unwrap_or(if current.annual_miles > 0.0 {
                current.annual_miles
            } else {
                class.default_annual_miles()
            });
            segments.insert(class, FleetSegment::new(count, annual_miles));
        }
    }

    Ok(segments)
}

fn cmd_classes(
    config: &Config,
    catalog_override: Option<&Path>,
    diesel_price: Option<f64>,
    output_format: OutputFormat,
) -> Result<()> {
    let catalog = open_catalog(config, catalog_override)?;
    let diesel_price = diesel_price.unwrap_or(config.diesel_price_per_litre);
    if !(diesel_price >= MIN_DIESEL_PRICE) {
        return Err(Error::InvalidInput(format!(
            "diesel price must be at least £{:.2}/litre",
            MIN_DIESEL_PRICE
        )));
    }

    let breakdown = class_breakdown(&catalog, diesel_price);
    output_classes(output_format, diesel_price, &breakdown)
}

fn cmd_export(
    config: &Config,
    catalog_override: Option<&Path>,
    args: &FleetArgs,
    output: PathBuf,
) -> Result<()> {
    let outcome = run_calculation(config, catalog_override, args)?;
    export_to_excel(&outcome, &output)?;

    println!("Exported to: {}", output.display());
    Ok(())
}

fn cmd_config(
    show: bool,
    set_diesel_price: Option<f64>,
    set_output: Option<OutputFormat>,
    set_catalog: Option<PathBuf>,
    clear_catalog: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(price) = set_diesel_price {
        if !(price >= MIN_DIESEL_PRICE) {
            return Err(Error::InvalidInput(format!(
                "diesel price must be at least £{:.2}/litre",
                MIN_DIESEL_PRICE
            )));
        }
        config.diesel_price_per_litre = price;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_catalog {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Catalog file not found: {}",
                path.display()
            )));
        }
        config.catalog_path = Some(path);
        modified = true;
    }

    if clear_catalog {
        config.catalog_path = None;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
