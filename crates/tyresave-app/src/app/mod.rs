//! Application use cases

pub mod savings_service;

pub use savings_service::{
    calculate_savings, class_breakdown, default_fleet, ClassBreakdown, SavingsOutcome,
    SavingsRequest,
};
