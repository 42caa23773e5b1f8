use std::collections::BTreeMap;

use pedicheck_core::models::features::FeatureVector;

use crate::catalog::SymptomCatalog;
use crate::context::PatientContext;
use crate::error::SymptomError;
use crate::features;
use crate::responses::ResponseSet;
use crate::selection::SymptomSelection;

/// Turns symptom selections and answers into scores and feature vectors.
///
/// Borrowing the catalog keeps the engine free to use from any number of
/// threads at once.
#[derive(Debug, Clone, Copy)]
pub struct ScoreEngine<'a> {
    catalog: &'a SymptomCatalog,
}

impl<'a> ScoreEngine<'a> {
    pub fn new(catalog: &'a SymptomCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a SymptomCatalog {
        self.catalog
    }

    pub fn select_symptoms<I, S>(&self, ids: I) -> Result<SymptomSelection, SymptomError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        SymptomSelection::new(self.catalog, ids)
    }

    /// Sum of the weights of the chosen option for every question of the
    /// symptom. An unanswered question is an error, never a zero.
    pub fn score(&self, symptom_id: &str, responses: &ResponseSet) -> Result<u32, SymptomError> {
        let symptom = self.catalog.get(symptom_id)?;

        let mut total = 0u32;
        for question in &symptom.questions {
            let label = responses.answer(symptom_id, &question.id).ok_or_else(|| {
                SymptomError::MissingResponse {
                    symptom_id: symptom_id.to_string(),
                    question_id: question.id.clone(),
                }
            })?;
            let option = question
                .option(label)
                .ok_or_else(|| SymptomError::UnknownAnswer {
                    symptom_id: symptom_id.to_string(),
                    question_id: question.id.clone(),
                    answer: label.to_string(),
                })?;
            total += option.weight;
        }

        tracing::trace!(symptom_id, score = total, "symptom scored");
        Ok(total)
    }

    /// Score every selected symptom. Fails on the first incomplete one.
    pub fn score_selection(
        &self,
        selection: &SymptomSelection,
        responses: &ResponseSet,
    ) -> Result<BTreeMap<String, u32>, SymptomError> {
        let mut scores = BTreeMap::new();
        for id in selection.ids() {
            scores.insert(id.clone(), self.score(id, responses)?);
        }
        Ok(scores)
    }

    pub fn build_feature_vector(
        &self,
        context: &PatientContext,
        responses: &ResponseSet,
    ) -> Result<FeatureVector, SymptomError> {
        let scores = self.score_selection(context.selection(), responses)?;
        Ok(features::from_scores(
            self.catalog,
            &scores,
            context.medical_history(),
        ))
    }
}
