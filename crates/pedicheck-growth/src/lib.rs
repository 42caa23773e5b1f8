//! pedicheck-growth
//!
//! Places a child's weight and height on simplified percentile curves.
//! The curves are linear approximations for screening, not WHO tables.

pub mod assess;
pub mod curves;
pub mod error;

pub use assess::{assess, GrowthAssessment, GrowthMeasurement, Placement};
pub use curves::{Curve, Percentile, PercentileBand, Sex};
pub use error::GrowthError;
