use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use pedicheck_core::models::report::Report;
use pedicheck_export::{export_report, ExportFormat};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RenderRequest {
    pub report: Report,
    #[serde(default)]
    pub format: ExportFormat,
}

/// Render a previously produced report. The report is checked first so a
/// hand-edited one cannot render inconsistent probabilities.
pub async fn render_report(
    State(state): State<AppState>,
    Json(req): Json<RenderRequest>,
) -> Result<Response, ApiError> {
    req.report
        .check_invariants()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let bytes = export_report(&state.renderer, &req.report, req.format, &state.styles)?;
    let filename = format!(
        "attachment; filename=\"pedicheck-report.{}\"",
        req.format.file_extension()
    );

    Ok((
        [
            (header::CONTENT_TYPE, req.format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, filename),
        ],
        bytes,
    )
        .into_response())
}
