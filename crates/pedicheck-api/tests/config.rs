use std::io::Write;

use serde_json::json;

use pedicheck_api::config::{load_config_from, migrate, ServiceConfig, CURRENT_VERSION};
use pedicheck_api::state::AppState;

fn write_json(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(value.to_string().as_bytes()).unwrap();
    path
}

#[test]
fn missing_fields_take_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "config.json",
        &json!({"config_version": 1, "bind_address": "0.0.0.0:9000"}),
    );

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.bind_address, "0.0.0.0:9000");
    assert_eq!(config.safety, ServiceConfig::default().safety);
    assert!(config.dataset_path.is_none());
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(
        &dir,
        "config.json",
        &json!({
            "var_smoothing": 1e-6,
            "infant_age_months": 6,
            "safety": {"default_score_threshold": 4}
        }),
    );

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.config_version, CURRENT_VERSION);
    assert_eq!(config.training.var_smoothing, 1e-6);
    assert_eq!(config.safety.infant_age_months, 6);
    assert_eq!(config.safety.default_score_threshold, 4);
}

#[test]
fn newer_config_version_is_refused() {
    let err = migrate(json!({"config_version": 99}), 99).unwrap_err();
    assert!(err.to_string().contains("newer"));
}

#[test]
fn oversized_config_version_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(&dir, "config.json", &json!({"config_version": 4_294_967_297_u64}));

    let err = load_config_from(&path).unwrap_err();
    assert!(err.to_string().contains("newer"));
}

#[test]
fn non_object_config_is_refused() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn custom_catalog_is_loaded_and_validated() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_json(
        &dir,
        "catalog.json",
        &json!([{
            "id": "TEETHING",
            "label": "Teething",
            "questions": [{
                "id": "Drooling",
                "prompt": "How much drooling?",
                "options": [{"label": "Little", "weight": 0}, {"label": "Lots", "weight": 2}]
            }]
        }]),
    );
    let config = ServiceConfig {
        catalog_path: Some(catalog),
        ..ServiceConfig::default()
    };
    let state = AppState::from_config(&config).unwrap();
    assert_eq!(state.engine.catalog().list_symptoms(), vec!["TEETHING"]);

    let broken = write_json(
        &dir,
        "broken.json",
        &json!([{"id": "TEETHING", "label": "Teething", "questions": [
            {"id": "Drooling", "prompt": "How much?", "options": []}
        ]}]),
    );
    let config = ServiceConfig {
        catalog_path: Some(broken),
        ..ServiceConfig::default()
    };
    assert!(AppState::from_config(&config).is_err());
}

#[test]
fn dataset_file_trains_the_model() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::from_config(&ServiceConfig::default()).unwrap();

    let features = state.engine.catalog().feature_names();
    let records: Vec<_> = [("Flu", 6.0), ("Flu", 5.0), ("Common Cold", 0.0), ("Common Cold", 1.0)]
        .into_iter()
        .map(|(label, fever)| {
            let mut obj = serde_json::Map::new();
            obj.insert("CONDITION".to_string(), json!(label));
            for f in &features {
                obj.insert(f.clone(), json!(if f == "FEVER_SCORE" { fever } else { 0.0 }));
            }
            serde_json::Value::Object(obj)
        })
        .collect();
    let path = write_json(&dir, "cases.json", &json!(records));

    state.train_from_file(&path).unwrap();
    assert!(state.engine.models().is_trained());

    assert!(state.train_from_file(&dir.path().join("absent.json")).is_err());
    assert!(state.engine.models().is_trained());
}
