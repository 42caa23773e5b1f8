use pedicheck_symptoms::catalog::{AnswerOption, FollowUpQuestion, SymptomDefinition};
use pedicheck_symptoms::{SymptomCatalog, SymptomError};

fn question(id: &str, options: &[(&str, u32)]) -> FollowUpQuestion {
    FollowUpQuestion {
        id: id.to_string(),
        prompt: format!("{id}?"),
        options: options
            .iter()
            .map(|(label, weight)| AnswerOption {
                label: label.to_string(),
                weight: *weight,
            })
            .collect(),
    }
}

fn symptom(id: &str, questions: Vec<FollowUpQuestion>) -> SymptomDefinition {
    SymptomDefinition {
        id: id.to_string(),
        label: id.to_lowercase(),
        questions,
        description: None,
    }
}

#[test]
fn builtin_catalog_passes_validation() {
    let builtin = SymptomCatalog::builtin().expect("built-in table should validate");
    let revalidated = SymptomCatalog::from_definitions(builtin.definitions().to_vec()).unwrap();
    assert_eq!(builtin.list_symptoms(), revalidated.list_symptoms());
}

#[test]
fn list_symptoms_keeps_table_order() {
    let catalog = SymptomCatalog::builtin().unwrap();
    let ids = catalog.list_symptoms();
    assert_eq!(ids.first(), Some(&"FEVER"));
    assert_eq!(ids.len(), 10);
    assert!(ids.contains(&"HEADACHE"));
}

#[test]
fn fever_questions_carry_documented_weights() {
    let catalog = SymptomCatalog::builtin().unwrap();
    let questions = catalog.questions_for("FEVER").unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, "Temperature");
    assert_eq!(questions[0].option("Severe").unwrap().weight, 3);
    assert_eq!(questions[1].id, "Duration");
    assert_eq!(questions[1].option("3-7 days").unwrap().weight, 3);
}

#[test]
fn every_builtin_question_offers_a_zero_weight_option() {
    let catalog = SymptomCatalog::builtin().unwrap();
    for def in catalog.definitions() {
        for q in &def.questions {
            assert!(
                q.options.iter().any(|o| o.weight == 0),
                "{}/{} has no zero option",
                def.id,
                q.id
            );
        }
    }
}

#[test]
fn questions_for_unknown_symptom_fails() {
    let catalog = SymptomCatalog::builtin().unwrap();
    let err = catalog.questions_for("SNEEZING").unwrap_err();
    assert!(matches!(err, SymptomError::UnknownSymptom(id) if id == "SNEEZING"));
}

#[test]
fn feature_names_cover_every_symptom_and_history_tag() {
    let catalog = SymptomCatalog::builtin().unwrap();
    let names = catalog.feature_names();
    assert!(names.contains(&"FEVER_SCORE".to_string()));
    assert!(names.contains(&"ABDOMINAL_PAIN_SCORE".to_string()));
    assert!(names.contains(&"IMMUNOCOMPROMISED_FEATURE".to_string()));
    assert_eq!(names.len(), 10 + 5);
}

#[test]
fn duplicate_option_labels_are_rejected() {
    let defs = vec![symptom(
        "FEVER",
        vec![question("Temperature", &[("Mild", 1), ("Mild", 2)])],
    )];
    let err = SymptomCatalog::from_definitions(defs).unwrap_err();
    assert!(matches!(err, SymptomError::InvalidCatalog(msg) if msg.contains("duplicate option")));
}

#[test]
fn question_without_options_is_rejected() {
    let defs = vec![symptom("FEVER", vec![question("Temperature", &[])])];
    assert!(matches!(
        SymptomCatalog::from_definitions(defs),
        Err(SymptomError::InvalidCatalog(_))
    ));
}

#[test]
fn duplicate_symptom_ids_are_rejected() {
    let defs = vec![
        symptom("COUGH", vec![question("Severity", &[("Mild", 1)])]),
        symptom("COUGH", vec![question("Severity", &[("Mild", 1)])]),
    ];
    assert!(matches!(
        SymptomCatalog::from_definitions(defs),
        Err(SymptomError::InvalidCatalog(_))
    ));
}

#[test]
fn catalog_loads_from_json() {
    let json = r#"[
        {
            "id": "WHEEZE",
            "label": "Wheeze",
            "questions": [
                {
                    "id": "Severity",
                    "prompt": "How loud?",
                    "options": [
                        { "label": "Quiet", "weight": 0 },
                        { "label": "Loud", "weight": 2 }
                    ]
                }
            ]
        }
    ]"#;
    let catalog = SymptomCatalog::from_json(json).unwrap();
    assert_eq!(catalog.list_symptoms(), vec!["WHEEZE"]);
    assert_eq!(catalog.get("WHEEZE").unwrap().max_score(), 2);
}

#[test]
fn malformed_json_catalog_is_a_serialization_error() {
    let err = SymptomCatalog::from_json("{\"id\": 3}").unwrap_err();
    assert!(matches!(err, SymptomError::Serialization(_)));
}
