//! pedicheck-api
//!
//! HTTP front for symptom triage, report rendering, model management,
//! facility lookup and growth assessment.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/symptoms", get(routes::symptoms::list_symptoms))
        .route("/symptoms/{id}", get(routes::symptoms::get_symptom))
        .route("/triage", post(routes::triage::run_triage))
        .route("/reports/render", post(routes::reports::render_report))
        .route("/model", get(routes::model::model_info))
        .route("/model/train", post(routes::model::train_model))
        .route("/facilities", get(routes::facilities::nearby_facilities))
        .route("/growth", post(routes::growth::assess_growth))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
