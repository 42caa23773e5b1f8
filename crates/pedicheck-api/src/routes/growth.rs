use axum::Json;

use pedicheck_growth::{assess, GrowthAssessment, GrowthMeasurement};

use crate::error::ApiError;

pub async fn assess_growth(
    Json(measurement): Json<GrowthMeasurement>,
) -> Result<Json<GrowthAssessment>, ApiError> {
    Ok(Json(assess(&measurement)?))
}
