//! pedicheck-facilities
//!
//! Nearby healthcare facilities from OpenStreetMap's Overpass API.
//! Entirely separate from triage; a failed lookup never affects a report.

pub mod config;
pub mod error;
pub mod models;
pub mod overpass;

pub use config::FacilitiesConfig;
pub use error::FacilityError;
pub use models::{Facility, SearchArea};
pub use overpass::OverpassClient;

/// Anything that can list facilities around a point.
pub trait FacilityLookup: Send + Sync {
    fn nearby(&self, area: &SearchArea) -> Result<Vec<Facility>, FacilityError>;
}
