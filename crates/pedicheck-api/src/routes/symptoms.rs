use axum::extract::{Path, State};
use axum::Json;

use pedicheck_symptoms::catalog::SymptomDefinition;

use crate::error::ApiError;
use crate::state::AppState;

/// The whole catalog, option weights included, so the scoring table can be
/// audited.
pub async fn list_symptoms(State(state): State<AppState>) -> Json<Vec<SymptomDefinition>> {
    Json(state.engine.catalog().definitions().to_vec())
}

pub async fn get_symptom(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SymptomDefinition>, ApiError> {
    let symptom = state
        .engine
        .catalog()
        .get(&id)
        .map_err(|_| ApiError::NotFound(format!("symptom not found: {id}")))?;
    Ok(Json(symptom.clone()))
}
