use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use pedicheck_facilities::{Facility, SearchArea};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct FacilityQuery {
    pub lat: f64,
    pub lon: f64,
    /// Metres; the configured default when absent.
    pub radius: Option<u32>,
}

pub async fn nearby_facilities(
    State(state): State<AppState>,
    Query(query): Query<FacilityQuery>,
) -> Result<Json<Vec<Facility>>, ApiError> {
    let area = SearchArea::new(
        query.lat,
        query.lon,
        query.radius.unwrap_or(state.default_radius_m),
    )?;

    let lookup = state.facilities.clone();
    let facilities = tokio::task::spawn_blocking(move || lookup.nearby(&area)).await??;
    Ok(Json(facilities))
}
