use serde::{Deserialize, Serialize};

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilitiesConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Used when a request gives no radius.
    pub default_radius_m: u32,
}

impl Default for FacilitiesConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_OVERPASS_URL.to_string(),
            timeout_secs: 15,
            default_radius_m: 5_000,
        }
    }
}
