//! Infrastructure layer - catalog and fleet file loaders

pub mod catalog_loader;
pub mod fleet_csv;
