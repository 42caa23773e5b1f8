use std::sync::Arc;

use pedicheck_classifier::{train, Cell, ClassifierError, Dataset, ModelRegistry, TrainingConfig};
use pedicheck_core::models::report::Report;
use pedicheck_report::{TriageEngine, TriageError, TriageRequest};
use pedicheck_safety::advice::{condition_advice, GENERAL_SELF_CARE, SEEK_CARE_PROMPTLY};
use pedicheck_safety::{SafetyConfig, SafetyRuleSet};
use pedicheck_symptoms::{ResponseSet, SymptomCatalog, SymptomError};

fn engine() -> TriageEngine {
    let catalog = SymptomCatalog::builtin().unwrap();
    let rules = SafetyRuleSet::standard(
        &SafetyConfig::default(),
        catalog
            .definitions()
            .iter()
            .map(|d| (d.id.as_str(), d.label.as_str())),
    );
    TriageEngine::new(
        Arc::new(catalog),
        Arc::new(ModelRegistry::new()),
        Arc::new(rules),
    )
}

/// Cold cases show little or no fever, flu cases a lot.
fn fever_dataset(features: &[String]) -> Dataset {
    let mut columns = vec!["CONDITION".to_string()];
    columns.extend(features.iter().cloned());

    let row = |label: &str, fever: f64| {
        let mut cells = vec![Cell::from(label)];
        cells.extend(features.iter().map(|f| {
            if f == "FEVER_SCORE" {
                Cell::from(fever)
            } else {
                Cell::from(0.0)
            }
        }));
        cells
    };

    [
        row("Common Cold", 0.0),
        row("Common Cold", 1.0),
        row("Common Cold", 0.0),
        row("Flu", 5.0),
        row("Flu", 6.0),
        row("Flu", 7.0),
    ]
    .into_iter()
    .try_fold(Dataset::new(columns), |ds, r| ds.with_row(r))
    .unwrap()
}

fn trained_engine() -> TriageEngine {
    let engine = engine();
    let dataset = fever_dataset(&engine.catalog().feature_names());
    engine.train(&dataset, &TrainingConfig::default()).unwrap();
    engine
}

fn mild_fever(age_months: u32) -> TriageRequest {
    TriageRequest {
        age_months,
        medical_history: vec![],
        symptoms: vec!["FEVER".to_string()],
        responses: ResponseSet::new()
            .with_answer("FEVER", "Temperature", "Normal")
            .with_answer("FEVER", "Duration", "Less than 1 day"),
    }
}

#[test]
fn toddler_with_mild_fever_gets_condition_advice_and_self_care() {
    let engine = trained_engine();
    let report = engine.run(&mild_fever(24)).unwrap();

    assert_eq!(report.symptom_scores["FEVER"], 0);
    assert!(report.red_flags.is_empty());
    assert_eq!(report.top_prediction.as_deref(), Some("Common Cold"));
    assert_eq!(report.probabilities.len(), 2);
    assert_eq!(
        report.recommendations[0],
        condition_advice("Common Cold", &Default::default())
    );
    assert_eq!(&report.recommendations[1..], GENERAL_SELF_CARE);
    report.check_invariants().unwrap();
}

#[test]
fn high_fever_ranks_flu_first_and_raises_a_flag() {
    let engine = trained_engine();
    let request = TriageRequest {
        responses: ResponseSet::new()
            .with_answer("FEVER", "Temperature", "Severe")
            .with_answer("FEVER", "Duration", "3-7 days"),
        ..mild_fever(24)
    };
    let report = engine.run(&request).unwrap();

    assert_eq!(report.symptom_scores["FEVER"], 6);
    assert_eq!(report.top_prediction.as_deref(), Some("Flu"));
    assert_eq!(report.red_flags, vec!["High fever severity reported"]);
    assert_eq!(report.recommendations[0], SEEK_CARE_PROMPTLY);
}

#[test]
fn red_flags_survive_without_a_model() {
    let engine = engine();
    let report = engine.run(&mild_fever(2)).unwrap();

    assert!(report.top_prediction.is_none());
    assert!(report.probabilities.is_empty());
    assert_eq!(report.red_flags.len(), 1);
    assert!(report.red_flags[0].starts_with("Infants under 3 months"));
    assert_eq!(report.recommendations[0], SEEK_CARE_PROMPTLY);
    report.check_invariants().unwrap();
}

#[test]
fn missing_answer_fails_the_request() {
    let engine = trained_engine();
    let request = TriageRequest {
        responses: ResponseSet::new().with_answer("FEVER", "Temperature", "Mild"),
        ..mild_fever(24)
    };
    let err = engine.run(&request).unwrap_err();
    assert!(matches!(
        err,
        TriageError::Symptom(SymptomError::MissingResponse { ref question_id, .. })
            if question_id == "Duration"
    ));
}

#[test]
fn too_many_symptoms_fail_before_scoring() {
    let engine = trained_engine();
    let request = TriageRequest {
        symptoms: ["FEVER", "COUGH", "RASH", "VOMITING", "DIARRHEA", "HEADACHE"]
            .into_iter()
            .map(String::from)
            .collect(),
        ..mild_fever(24)
    };
    let err = engine.run(&request).unwrap_err();
    assert!(matches!(
        err,
        TriageError::Symptom(SymptomError::SelectionLimitExceeded { requested: 6, max: 5 })
    ));
}

#[test]
fn failed_training_keeps_previous_model() {
    let engine = trained_engine();
    let before = engine.models().current().unwrap().version();

    let empty = Dataset::new(["CONDITION"]);
    let err = engine.train(&empty, &TrainingConfig::default()).unwrap_err();
    assert!(matches!(err, TriageError::Classifier(ClassifierError::DatasetSchema(_))));
    assert_eq!(engine.models().current().unwrap().version(), before);
}

#[test]
fn request_reads_camel_case_json() {
    let request: TriageRequest = serde_json::from_str(
        r#"{
            "ageMonths": 18,
            "symptoms": ["FEVER"],
            "responses": {"FEVER": {"Temperature": "Mild", "Duration": "1-2 days"}}
        }"#,
    )
    .unwrap();
    assert_eq!(request.age_months, 18);
    assert!(request.medical_history.is_empty());

    let report = trained_engine().run(&request).unwrap();
    assert_eq!(report.symptom_scores["FEVER"], 2);
}

#[test]
fn model_reports_survive_a_json_round_trip_exactly() {
    let engine = trained_engine();
    let answers = [
        ("Normal", "Less than 1 day"),
        ("Mild", "1-2 days"),
        ("Moderate", "2-3 days"),
        ("Severe", "3-7 days"),
        ("Severe", "More than 7 days"),
    ];
    for (temperature, duration) in answers {
        let request = TriageRequest {
            responses: ResponseSet::new()
                .with_answer("FEVER", "Temperature", temperature)
                .with_answer("FEVER", "Duration", duration),
            ..mild_fever(24)
        };
        let original = engine.run(&request).unwrap();
        let restored = Report::from_json(&original.to_json().unwrap()).unwrap();
        assert_eq!(restored, original, "{temperature} / {duration}");
        restored.check_invariants().unwrap();
    }
}

#[test]
fn model_with_foreign_features_still_yields_red_flags() {
    let engine = engine();
    let dataset = [("Flu", 120.0), ("Common Cold", 95.0)]
        .into_iter()
        .try_fold(Dataset::new(["CONDITION", "PULSE_RATE"]), |ds, (label, pulse)| {
            ds.with_row(vec![Cell::from(label), Cell::from(pulse)])
        })
        .unwrap();
    let foreign = train(&dataset, &["PULSE_RATE".to_string()], &TrainingConfig::default()).unwrap();
    engine.models().publish(foreign);

    let report = engine.run(&mild_fever(2)).unwrap();
    assert!(report.top_prediction.is_none());
    assert!(report.probabilities.is_empty());
    assert_eq!(report.red_flags.len(), 1);
    assert_eq!(report.recommendations[0], SEEK_CARE_PROMPTLY);
}
