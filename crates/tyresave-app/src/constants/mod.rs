//! Built-in calculation constants

pub mod van_specs;

pub use van_specs::{
    default_catalog, DEFAULT_ASSUMPTIONS, DEFAULT_DIESEL_PRICE, MIN_DIESEL_PRICE,
    VAN_SPECS,
};
