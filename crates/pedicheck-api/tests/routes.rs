use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use pedicheck_api::config::ServiceConfig;
use pedicheck_api::state::AppState;
use pedicheck_facilities::{Facility, FacilityError, FacilityLookup, SearchArea};

struct FixedLookup(Vec<Facility>);

impl FacilityLookup for FixedLookup {
    fn nearby(&self, _area: &SearchArea) -> Result<Vec<Facility>, FacilityError> {
        Ok(self.0.clone())
    }
}

struct DownLookup;

impl FacilityLookup for DownLookup {
    fn nearby(&self, _area: &SearchArea) -> Result<Vec<Facility>, FacilityError> {
        Err(FacilityError::Http("connection refused".to_string()))
    }
}

fn state() -> AppState {
    AppState::from_config(&ServiceConfig::default())
        .unwrap()
        .with_facility_lookup(Arc::new(FixedLookup(vec![Facility {
            name: "Children's Hospital".to_string(),
            kind: "hospital".to_string(),
            latitude: 40.7,
            longitude: -74.0,
            pediatric: true,
        }])))
}

/// Cold cases have little fever, flu cases a lot. Every other feature is 0.
fn training_records(state: &AppState) -> Value {
    let features = state.engine.catalog().feature_names();
    let record = |label: &str, fever: f64| {
        let mut obj = serde_json::Map::new();
        obj.insert("CONDITION".to_string(), json!(label));
        for f in &features {
            let value = if f == "FEVER_SCORE" { fever } else { 0.0 };
            obj.insert(f.clone(), json!(value));
        }
        Value::Object(obj)
    };
    json!([
        record("Common Cold", 0.0),
        record("Common Cold", 1.0),
        record("Common Cold", 0.0),
        record("Flu", 5.0),
        record("Flu", 6.0),
        record("Flu", 7.0),
    ])
}

async fn send(state: &AppState, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = pedicheck_api::app(state.clone()).oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(state, req).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post(state: &AppState, uri: &str, body: &Value) -> (StatusCode, Value) {
    let (status, bytes) = post_raw(state, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post_raw(state: &AppState, uri: &str, body: &Value) -> (StatusCode, Vec<u8>) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, req).await
}

async fn trained_state() -> AppState {
    let state = state();
    let (status, _) = post(&state, "/model/train", &training_records(&state)).await;
    assert_eq!(status, StatusCode::OK);
    state
}

fn fever_request(age_months: u32, temperature: &str, duration: &str) -> Value {
    json!({
        "ageMonths": age_months,
        "medicalHistory": [],
        "symptoms": ["FEVER"],
        "responses": {"FEVER": {"Temperature": temperature, "Duration": duration}}
    })
}

#[tokio::test]
async fn health_reports_model_state() {
    let state = state();
    let (status, body) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "modelLoaded": false}));

    let state = trained_state().await;
    let (_, body) = get(&state, "/health").await;
    assert_eq!(body["modelLoaded"], true);
}

#[tokio::test]
async fn symptom_catalog_is_browsable() {
    let state = state();
    let (status, body) = get(&state, "/symptoms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0]["id"], "FEVER");
    assert_eq!(body[0]["questions"][0]["id"], "Temperature");
    assert_eq!(
        body[0]["questions"][0]["options"][3],
        json!({"label": "Severe", "weight": 3})
    );

    let (status, body) = get(&state, "/symptoms/COUGH").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"].as_array().unwrap().len(), 3);

    let (status, _) = get(&state, "/symptoms/HICCUPS").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn model_endpoints_before_and_after_training() {
    let state = state();
    let (status, _) = get(&state, "/model").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, trained) = post(&state, "/model/train", &training_records(&state)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(trained["conditions"], json!(["Common Cold", "Flu"]));
    assert_eq!(trained["trainingRows"], 6);

    let (status, info) = get(&state, "/model").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["version"], trained["version"]);
}

#[tokio::test]
async fn bad_training_data_keeps_current_model() {
    let state = trained_state().await;
    let (_, before) = get(&state, "/model").await;

    let (status, body) = post(&state, "/model/train", &json!([{"CONDITION": "Flu"}])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("FEVER_SCORE"));

    let (_, after) = get(&state, "/model").await;
    assert_eq!(before["version"], after["version"]);
}

#[tokio::test]
async fn triage_without_model_still_flags_infants() {
    let state = state();
    let (status, report) = post(&state, "/triage", &fever_request(2, "Normal", "Less than 1 day")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["topPrediction"], Value::Null);
    assert_eq!(report["probabilities"], json!([]));
    assert_eq!(report["redFlags"].as_array().unwrap().len(), 1);
    assert_eq!(report["patientInfo"]["ageMonths"], 2);
}

#[tokio::test]
async fn triage_with_model_ranks_conditions() {
    let state = trained_state().await;
    let (status, report) = post(&state, "/triage", &fever_request(24, "Severe", "3-7 days")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["symptomScores"]["FEVER"], 6);
    assert_eq!(report["topPrediction"], "Flu");
    assert_eq!(report["probabilities"][0]["condition"], "Flu");
    assert_eq!(report["redFlags"], json!(["High fever severity reported"]));
}

#[tokio::test]
async fn incomplete_or_oversized_requests_are_rejected() {
    let state = trained_state().await;

    let mut missing = fever_request(24, "Mild", "1-2 days");
    missing["responses"]["FEVER"]
        .as_object_mut()
        .unwrap()
        .remove("Duration");
    let (status, body) = post(&state, "/triage", &missing).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Duration"));

    let mut too_many = fever_request(24, "Mild", "1-2 days");
    too_many["symptoms"] = json!(["FEVER", "COUGH", "RASH", "VOMITING", "DIARRHEA", "HEADACHE"]);
    let (status, _) = post(&state, "/triage", &too_many).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(&state, "/triage", &fever_request(24, "Scorching", "1-2 days")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reports_render_as_markdown_and_docx() {
    let state = trained_state().await;
    let (_, report) = post(&state, "/triage", &fever_request(24, "Severe", "3-7 days")).await;

    let req = Request::builder()
        .method("POST")
        .uri("/reports/render")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"report": report}).to_string()))
        .unwrap();
    let response = pedicheck_api::app(state.clone()).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/markdown"));
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let markdown = String::from_utf8(body.to_vec()).unwrap();
    assert!(markdown.contains("Most likely: **Flu**"));

    let (status, bytes) = post_raw(
        &state,
        "/reports/render",
        &json!({"report": report, "format": "docx"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn inconsistent_reports_are_not_rendered() {
    let state = trained_state().await;
    let (_, mut report) = post(&state, "/triage", &fever_request(24, "Severe", "3-7 days")).await;
    report["topPrediction"] = json!("Common Cold");

    let (status, _) = post(&state, "/reports/render", &json!({"report": report})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn facilities_use_configured_lookup() {
    let state = state();
    let (status, body) = get(&state, "/facilities?lat=40.71&lon=-74.0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Children's Hospital");
    assert_eq!(body[0]["pediatric"], true);

    let (status, _) = get(&state, "/facilities?lat=40.71&lon=-74.0&radius=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&state, "/facilities?lon=-74.0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn facility_outage_is_a_gateway_error_and_triage_still_works() {
    let state = state().with_facility_lookup(Arc::new(DownLookup));
    let (status, _) = get(&state, "/facilities?lat=40.71&lon=-74.0").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (status, _) = post(&state, "/triage", &fever_request(24, "Mild", "1-2 days")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn growth_assessment() {
    let state = state();
    let (status, body) = post(
        &state,
        "/growth",
        &json!({"sex": "male", "ageMonths": 12, "weightKg": 8.0, "heightCm": 59.0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weightForAge"]["band"], "from15th_to50th");

    let (status, body) = post(
        &state,
        "/growth",
        &json!({"sex": "female", "ageMonths": 30, "weightKg": 12.0, "heightCm": 88.0}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("age_months"));
}
