//! Domain layer - models, services, and catalog traits

pub mod model;
pub mod repository;
pub mod service;
