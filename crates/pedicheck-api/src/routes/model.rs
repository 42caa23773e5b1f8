use axum::extract::State;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use pedicheck_classifier::{ConditionModel, Dataset};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    version: Uuid,
    trained_at: jiff::Timestamp,
    training_rows: usize,
    conditions: Vec<String>,
    features: Vec<String>,
}

impl From<&ConditionModel> for ModelInfo {
    fn from(model: &ConditionModel) -> Self {
        Self {
            version: model.version(),
            trained_at: model.trained_at(),
            training_rows: model.training_rows(),
            conditions: model.vocabulary().into_iter().map(String::from).collect(),
            features: model.features().to_vec(),
        }
    }
}

pub async fn model_info(State(state): State<AppState>) -> Result<Json<ModelInfo>, ApiError> {
    let model = state.engine.models().current()?;
    Ok(Json(ModelInfo::from(model.as_ref())))
}

/// Body is a JSON array of records, one per training case. On failure the
/// active model stays in place.
pub async fn train_model(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ModelInfo>, ApiError> {
    let dataset = Dataset::from_json_records(&body)?;
    let engine = state.engine.clone();
    let training = state.training.clone();

    let model = tokio::task::spawn_blocking(move || engine.train(&dataset, &training)).await??;
    Ok(Json(ModelInfo::from(model.as_ref())))
}
