//! Campus carbon footprint estimator
//!
//! Estimates weekly CO2 from generator and motorcycle use and buckets the
//! result into a risk level. Also carries the awareness material and the
//! banner rotation used by the command-line front end.

pub mod coerce;
pub mod content;
pub mod error;
pub mod estimator;
pub mod models;
pub mod rotator;

pub use error::{Error, Result};
pub use estimator::{Estimate, classify_risk, compute_weekly_emissions, emission_factor, estimate};
pub use models::{EmissionsResult, FuelType, RawUsageInputs, RiskLevel, UsagePattern};
