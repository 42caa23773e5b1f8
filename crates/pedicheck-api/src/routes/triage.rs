use axum::extract::State;
use axum::Json;

use pedicheck_core::models::report::Report;
use pedicheck_report::TriageRequest;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn run_triage(
    State(state): State<AppState>,
    Json(request): Json<TriageRequest>,
) -> Result<Json<Report>, ApiError> {
    let report = state.engine.run(&request)?;
    Ok(Json(report))
}
