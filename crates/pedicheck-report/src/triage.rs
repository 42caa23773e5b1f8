use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pedicheck_classifier::{ClassifierError, ConditionModel, Dataset, ModelRegistry, TrainingConfig};
use pedicheck_core::models::report::Report;
use pedicheck_safety::SafetyRuleSet;
use pedicheck_symptoms::{features, PatientContext, ResponseSet, ScoreEngine, SymptomCatalog};

use crate::assemble::{assemble, ReportParts};
use crate::error::TriageError;

/// One parent's answers, as collected by the front end.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TriageRequest {
    pub age_months: u32,
    #[serde(default)]
    pub medical_history: Vec<String>,
    pub symptoms: Vec<String>,
    /// symptom id -> question id -> chosen option label
    #[ts(type = "Record<string, Record<string, string>>")]
    pub responses: ResponseSet,
}

/// Runs a triage request through scoring, classification, safety rules
/// and report assembly.
///
/// Cheap to clone; all shared state is behind `Arc`s and only the model
/// registry ever changes.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    catalog: Arc<SymptomCatalog>,
    models: Arc<ModelRegistry>,
    rules: Arc<SafetyRuleSet>,
}

impl TriageEngine {
    pub fn new(
        catalog: Arc<SymptomCatalog>,
        models: Arc<ModelRegistry>,
        rules: Arc<SafetyRuleSet>,
    ) -> Self {
        Self {
            catalog,
            models,
            rules,
        }
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn models(&self) -> &ModelRegistry {
        &self.models
    }

    pub fn rules(&self) -> &SafetyRuleSet {
        &self.rules
    }

    /// Train on `dataset` using this catalog's feature columns and publish
    /// the result. A failure leaves the active model in place.
    pub fn train(
        &self,
        dataset: &Dataset,
        config: &TrainingConfig,
    ) -> Result<Arc<ConditionModel>, TriageError> {
        Ok(self
            .models
            .retrain(dataset, &self.catalog.feature_names(), config)?)
    }

    pub fn run(&self, request: &TriageRequest) -> Result<Report, TriageError> {
        let engine = ScoreEngine::new(&self.catalog);
        let selection = engine.select_symptoms(&request.symptoms)?;
        let context = PatientContext::new(
            request.age_months,
            request.medical_history.iter().cloned(),
            selection,
        );

        let scores = engine.score_selection(context.selection(), &request.responses)?;
        let vector = features::from_scores(&self.catalog, &scores, context.medical_history());

        let ranked = match self.models.predict(&vector) {
            Ok(ranked) => ranked,
            Err(ClassifierError::ModelNotTrained) => {
                tracing::warn!("no condition model available, reporting safety rules only");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "condition model rejected the feature vector, reporting safety rules only"
                );
                Vec::new()
            }
        };

        let assessment =
            self.rules
                .evaluate(context.age_months(), context.medical_history(), &scores);
        let recommendations = self
            .rules
            .recommendations(&assessment, ranked.first().map(|p| p.condition.as_str()));

        let report = assemble(ReportParts {
            patient: context.snapshot(),
            symptom_scores: scores,
            ranked,
            red_flags: assessment.red_flags,
            recommendations,
        })?;

        tracing::info!(
            symptoms = report.symptom_scores.len(),
            red_flags = report.red_flags.len(),
            top_prediction = ?report.top_prediction,
            "triage report assembled"
        );
        Ok(report)
    }
}
