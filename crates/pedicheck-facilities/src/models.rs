use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::FacilityError;

pub const MAX_RADIUS_M: u32 = 50_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArea {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: u32,
}

impl SearchArea {
    pub fn new(latitude: f64, longitude: f64, radius_m: u32) -> Result<Self, FacilityError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(FacilityError::InvalidArea(format!(
                "latitude {latitude} is outside -90..90"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(FacilityError::InvalidArea(format!(
                "longitude {longitude} is outside -180..180"
            )));
        }
        if radius_m == 0 || radius_m > MAX_RADIUS_M {
            return Err(FacilityError::InvalidArea(format!(
                "radius must be between 1 and {MAX_RADIUS_M} metres"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
            radius_m,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Facility {
    pub name: String,
    /// OSM amenity value: "doctors", "hospital", "clinic".
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Name mentions children or paediatrics.
    pub pediatric: bool,
}
