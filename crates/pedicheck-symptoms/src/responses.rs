use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Chosen answer labels, keyed by symptom id then question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet(BTreeMap<String, BTreeMap<String, String>>);

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(
        mut self,
        symptom_id: impl Into<String>,
        question_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.0
            .entry(symptom_id.into())
            .or_default()
            .insert(question_id.into(), label.into());
        self
    }

    pub fn answer(&self, symptom_id: &str, question_id: &str) -> Option<&str> {
        self.0
            .get(symptom_id)
            .and_then(|answers| answers.get(question_id))
            .map(String::as_str)
    }

    pub fn answered_symptoms(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<((String, String), String)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = ((String, String), String)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Self::new(), |set, ((symptom, question), label)| {
                set.with_answer(symptom, question, label)
            })
    }
}
