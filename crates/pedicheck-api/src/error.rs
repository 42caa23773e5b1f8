use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use pedicheck_classifier::ClassifierError;
use pedicheck_export::ExportError;
use pedicheck_facilities::FacilityError;
use pedicheck_growth::GrowthError;
use pedicheck_report::{ReportError, TriageError};
use pedicheck_symptoms::SymptomError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    /// No condition model is loaded.
    Unavailable(String),
    /// An upstream service (Overpass) failed.
    BadGateway(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            ApiError::BadGateway(msg) => {
                tracing::warn!("upstream failure: {msg}");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<SymptomError> for ApiError {
    fn from(e: SymptomError) -> Self {
        match e {
            SymptomError::InvalidCatalog(_) => ApiError::Internal(e.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<ClassifierError> for ApiError {
    fn from(e: ClassifierError) -> Self {
        match e {
            ClassifierError::ModelNotTrained => ApiError::Unavailable(e.to_string()),
            ClassifierError::DatasetSchema(_)
            | ClassifierError::InvalidConfig(_)
            | ClassifierError::Serialization(_) => ApiError::BadRequest(e.to_string()),
            ClassifierError::FeatureMismatch(_) | ClassifierError::InvalidModel(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<ReportError> for ApiError {
    fn from(e: ReportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<TriageError> for ApiError {
    fn from(e: TriageError) -> Self {
        match e {
            TriageError::Symptom(e) => e.into(),
            TriageError::Classifier(e) => e.into(),
            TriageError::Report(e) => e.into(),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<FacilityError> for ApiError {
    fn from(e: FacilityError) -> Self {
        match e {
            FacilityError::InvalidArea(_) => ApiError::BadRequest(e.to_string()),
            other => ApiError::BadGateway(other.to_string()),
        }
    }
}

impl From<GrowthError> for ApiError {
    fn from(e: GrowthError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("background task failed: {e}"))
    }
}
