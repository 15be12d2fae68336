//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tyresave_types::OutputFormat;

#[derive(Parser)]
#[command(name = "tyre-savings")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Estimate fleet savings from maintaining correct tyre pressure")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// TOML catalog replacing the built-in van specifications
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Vehicle count with optional annual mileage, written as `COUNT[@MILES]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FleetArg {
    pub count: u32,
    pub miles: Option<f64>,
}

impl FromStr for FleetArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, miles) = match s.split_once('@') {
            Some((count, miles)) => (count, Some(miles)),
            None => (s, None),
        };

        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("invalid vehicle count '{}'", count.trim()))?;

        let miles = match miles {
            Some(m) => {
                let value = m
                    .trim()
                    .replace(',', "")
                    .parse::<f64>()
                    .map_err(|_| format!("invalid annual mileage '{}'", m.trim()))?;
                if !(value >= 0.0) {
                    return Err(format!("annual mileage must not be negative: {}", value));
                }
                Some(value)
            }
            None => None,
        };

        Ok(Self { count, miles })
    }
}

/// Fleet inputs shared by calculate and export
#[derive(Args, Debug, Clone, Default)]
pub struct FleetArgs {
    /// Diesel price in £/litre. Uses config value if not specified.
    #[arg(long, short = 'd')]
    pub diesel_price: Option<f64>,

    /// Small vans as COUNT[@MILES] (default 10,000 miles)
    #[arg(long)]
    pub small: Option<FleetArg>,

    /// Medium vans as COUNT[@MILES] (default 12,000 miles)
    #[arg(long)]
    pub medium: Option<FleetArg>,

    /// Large vans as COUNT[@MILES] (default 15,000 miles)
    #[arg(long)]
    pub large: Option<FleetArg>,

    /// Long wheelbase vans as COUNT[@MILES] (default 20,000 miles)
    #[arg(long)]
    pub lwb: Option<FleetArg>,

    /// CSV file with columns class, vehicle_count, annual_miles
    #[arg(long)]
    pub fleet: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate annual savings for a fleet
    Calculate {
        #[command(flatten)]
        fleet: FleetArgs,
    },

    /// Show savings per 10,000 miles for every vehicle class
    Classes {
        /// Diesel price in £/litre. Uses config value if not specified.
        #[arg(long, short = 'd')]
        diesel_price: Option<f64>,
    },

    /// Export a fleet calculation to Excel
    Export {
        #[command(flatten)]
        fleet: FleetArgs,

        /// Output Excel file path
        #[arg(long, short = 'o', default_value = "tyre-savings.xlsx")]
        output: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default diesel price (£/litre)
        #[arg(long)]
        set_diesel_price: Option<f64>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set catalog TOML file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Go back to the built-in catalog
        #[arg(long)]
        clear_catalog: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_fleet_arg_count_only() {
        let arg: FleetArg = "12".parse().unwrap();
        assert_eq!(arg, FleetArg { count: 12, miles: None });
    }

    #[test]
    fn test_fleet_arg_with_miles() {
        let arg: FleetArg = "3@22,500".parse().unwrap();
        assert_eq!(arg.count, 3);
        assert_eq!(arg.miles, Some(22_500.0));
    }

    #[test]
    fn test_fleet_arg_invalid() {
        assert!("-1".parse::<FleetArg>().is_err());
        assert!("two".parse::<FleetArg>().is_err());
        assert!("2@-100".parse::<FleetArg>().is_err());
        assert!("2@far".parse::<FleetArg>().is_err());
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "tyre-savings",
            "calculate",
            "--small",
            "4",
            "--lwb",
            "2@25000",
            "-d",
            "1.45",
            "-f",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Calculate { fleet } => {
                assert_eq!(fleet.diesel_price, Some(1.45));
                assert_eq!(fleet.small.map(|a| a.count), Some(4));
                assert_eq!(fleet.lwb.and_then(|a| a.miles), Some(25_000.0));
                assert!(fleet.medium.is_none());
            }
            _ => panic!("expected calculate"),
        }
    }
}
