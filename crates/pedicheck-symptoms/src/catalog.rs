use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pedicheck_core::models::features::score_feature_name;
use pedicheck_core::models::history::history_feature_names;

use crate::builtin;
use crate::error::SymptomError;

/// Largest weight a single answer option may carry.
pub const MAX_OPTION_WEIGHT: u32 = 100;

/// One selectable answer and the weight it adds to the symptom score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub label: String,
    pub weight: u32,
}

/// A structured follow-up question refining one symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FollowUpQuestion {
    pub id: String,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl FollowUpQuestion {
    pub fn option(&self, label: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.label == label)
    }

    pub fn max_weight(&self) -> u32 {
        self.options.iter().map(|o| o.weight).max().unwrap_or(0)
    }
}

/// A top-level complaint with its ordered follow-up questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomDefinition {
    pub id: String,
    pub label: String,
    pub questions: Vec<FollowUpQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SymptomDefinition {
    /// Highest score reachable for this symptom.
    pub fn max_score(&self) -> u32 {
        self.questions.iter().map(FollowUpQuestion::max_weight).sum()
    }
}

/// Registry of every symptom the engine can score.
///
/// Built once at startup and shared read-only. Construction validates the
/// whole weight table so a malformed definition fails at load instead of
/// silently scoring as 0.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomCatalog {
    symptoms: Vec<SymptomDefinition>,
}

impl SymptomCatalog {
    /// The built-in weight table from [`builtin::BUILTIN_SYMPTOMS`],
    /// validated like any loaded catalog.
    pub fn builtin() -> Result<Self, SymptomError> {
        Self::from_definitions(builtin::definitions())
    }

    pub fn from_definitions(symptoms: Vec<SymptomDefinition>) -> Result<Self, SymptomError> {
        validate(&symptoms)?;
        tracing::debug!(symptoms = symptoms.len(), "symptom catalog validated");
        Ok(Self { symptoms })
    }

    /// Parse and validate a JSON array of symptom definitions.
    pub fn from_json(json: &str) -> Result<Self, SymptomError> {
        let symptoms: Vec<SymptomDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(symptoms)
    }

    /// Symptom ids in catalog order.
    pub fn list_symptoms(&self) -> Vec<&str> {
        self.symptoms.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn get(&self, symptom_id: &str) -> Result<&SymptomDefinition, SymptomError> {
        self.symptoms
            .iter()
            .find(|s| s.id == symptom_id)
            .ok_or_else(|| SymptomError::UnknownSymptom(symptom_id.to_string()))
    }

    pub fn questions_for(&self, symptom_id: &str) -> Result<&[FollowUpQuestion], SymptomError> {
        Ok(&self.get(symptom_id)?.questions)
    }

    pub fn contains(&self, symptom_id: &str) -> bool {
        self.symptoms.iter().any(|s| s.id == symptom_id)
    }

    /// The full weight table, for audit and display.
    pub fn definitions(&self) -> &[SymptomDefinition] {
        &self.symptoms
    }

    /// Every feature column a vector built from this catalog carries:
    /// one `<SYMPTOM>_SCORE` per symptom in catalog order, then the
    /// history features.
    pub fn feature_names(&self) -> Vec<String> {
        self.symptoms
            .iter()
            .map(|s| score_feature_name(&s.id))
            .chain(history_feature_names().map(str::to_string))
            .collect()
    }
}

fn validate(symptoms: &[SymptomDefinition]) -> Result<(), SymptomError> {
    if symptoms.is_empty() {
        return Err(invalid("catalog defines no symptoms"));
    }

    let mut symptom_ids = HashSet::new();
    for symptom in symptoms {
        if symptom.id.trim().is_empty() || symptom.label.trim().is_empty() {
            return Err(invalid("symptom id and label must be non-empty"));
        }
        if symptom.id.chars().any(char::is_whitespace) {
            return Err(invalid(format!("symptom id '{}' contains whitespace", symptom.id)));
        }
        if !symptom_ids.insert(symptom.id.as_str()) {
            return Err(invalid(format!("duplicate symptom id '{}'", symptom.id)));
        }
        if symptom.questions.is_empty() {
            return Err(invalid(format!("symptom '{}' has no questions", symptom.id)));
        }

        let mut question_ids = HashSet::new();
        for question in &symptom.questions {
            if question.id.trim().is_empty() || question.prompt.trim().is_empty() {
                return Err(invalid(format!(
                    "symptom '{}' has a question with empty id or prompt",
                    symptom.id
                )));
            }
            if !question_ids.insert(question.id.as_str()) {
                return Err(invalid(format!(
                    "duplicate question '{}' in symptom '{}'",
                    question.id, symptom.id
                )));
            }
            if question.options.is_empty() {
                return Err(invalid(format!(
                    "question '{}' of symptom '{}' has no options",
                    question.id, symptom.id
                )));
            }

            let mut labels = HashSet::new();
            for option in &question.options {
                if option.label.trim().is_empty() {
                    return Err(invalid(format!(
                        "question '{}' of symptom '{}' has an empty option label",
                        question.id, symptom.id
                    )));
                }
                if !labels.insert(option.label.as_str()) {
                    return Err(invalid(format!(
                        "duplicate option '{}' in question '{}' of symptom '{}'",
                        option.label, question.id, symptom.id
                    )));
                }
                if option.weight > MAX_OPTION_WEIGHT {
                    return Err(invalid(format!(
                        "option '{}' weight {} exceeds {MAX_OPTION_WEIGHT}",
                        option.label, option.weight
                    )));
                }
            }
        }
    }
    Ok(())
}

fn invalid(message: impl Into<String>) -> SymptomError {
    SymptomError::InvalidCatalog(message.into())
}
