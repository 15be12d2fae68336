//! Domain services

pub mod savings_calculator;
pub mod savings_report;

pub use savings_calculator::{
    aggregate, extra_fuel_cost_per_10k, extra_tyre_cost_per_10k, unit_saving_per_10k,
};
pub use savings_report::{format_gbp, generate_savings_report};
