use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::config::FacilitiesConfig;
use crate::error::FacilityError;
use crate::models::{Facility, SearchArea};
use crate::FacilityLookup;

/// Overpass QL for doctors, hospitals and clinics around a point.
pub fn build_query(area: &SearchArea) -> String {
    let around = format!(
        "around:{},{},{}",
        area.radius_m, area.latitude, area.longitude
    );
    format!(
        "[out:json];\n(\n  \
         node[\"amenity\"=\"doctors\"][\"healthcare\"=\"doctor\"]({around});\n  \
         node[\"amenity\"=\"hospital\"]({around});\n  \
         node[\"amenity\"=\"clinic\"]({around});\n\
         );\nout center;\n"
    )
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
struct Element {
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<Center>,
    tags: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Deserialize)]
struct Center {
    lat: f64,
    lon: f64,
}

fn is_pediatric(name: &str) -> bool {
    let name = name.to_lowercase();
    name.contains("pediatric") || name.contains("children")
}

/// Turn an Overpass JSON body into facilities.
///
/// Untagged elements are dropped, as are general practices (`doctors`)
/// that do not look paediatric and anything without coordinates.
pub fn parse_response(body: &str) -> Result<Vec<Facility>, FacilityError> {
    let response: OverpassResponse = serde_json::from_str(body)?;

    let facilities = response
        .elements
        .into_iter()
        .filter_map(|element| {
            let tags = element.tags?;
            let name = tags.get("name").cloned().unwrap_or_else(|| "Unknown".to_string());
            let kind = tags
                .get("amenity")
                .cloned()
                .unwrap_or_else(|| "facility".to_string());
            let pediatric = is_pediatric(&name);
            if kind == "doctors" && !pediatric {
                return None;
            }

            let (latitude, longitude) = match (element.lat, element.lon, element.center) {
                (Some(lat), Some(lon), _) => (lat, lon),
                (_, _, Some(c)) => (c.lat, c.lon),
                _ => return None,
            };

            Some(Facility {
                name,
                kind,
                latitude,
                longitude,
                pediatric,
            })
        })
        .collect();

    Ok(facilities)
}

/// Blocking Overpass client. Call it off the async runtime.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl OverpassClient {
    pub fn new(config: &FacilitiesConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();
        Self {
            agent,
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FacilityLookup for OverpassClient {
    fn nearby(&self, area: &SearchArea) -> Result<Vec<Facility>, FacilityError> {
        let query = build_query(area);
        let mut response = self
            .agent
            .get(&self.endpoint)
            .query("data", &query)
            .call()?;
        let body = response.body_mut().read_to_string()?;

        let facilities = parse_response(&body)?;
        tracing::info!(
            radius_m = area.radius_m,
            found = facilities.len(),
            "facility lookup complete"
        );
        Ok(facilities)
    }
}
