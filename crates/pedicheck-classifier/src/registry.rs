use std::sync::{Arc, PoisonError, RwLock};

use pedicheck_core::models::features::FeatureVector;
use pedicheck_core::models::prediction::ConditionProbability;

use crate::config::TrainingConfig;
use crate::dataset::Dataset;
use crate::error::ClassifierError;
use crate::model::{self, ConditionModel};

/// Holds the active condition model.
///
/// The lock only guards the pointer: training happens outside it and the
/// finished model is published in one swap, so readers see either the
/// previous model or the new one, never a partial build.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    active: RwLock<Option<Arc<ConditionModel>>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Result<Arc<ConditionModel>, ClassifierError> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(ClassifierError::ModelNotTrained)
    }

    pub fn is_trained(&self) -> bool {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Make `model` the active model, returning the shared handle.
    pub fn publish(&self, model: ConditionModel) -> Arc<ConditionModel> {
        let model = Arc::new(model);
        let previous = self
            .active
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Arc::clone(&model));

        tracing::info!(
            model_version = %model.version(),
            replaced = ?previous.map(|m| m.version()),
            "condition model published"
        );
        model
    }

    /// Train and publish. On failure the previous model stays active.
    pub fn retrain(
        &self,
        dataset: &Dataset,
        feature_names: &[String],
        config: &TrainingConfig,
    ) -> Result<Arc<ConditionModel>, ClassifierError> {
        match model::train(dataset, feature_names, config) {
            Ok(trained) => Ok(self.publish(trained)),
            Err(e) => {
                tracing::warn!(error = %e, "retraining failed, keeping the active model");
                Err(e)
            }
        }
    }

    /// Predict with whichever model is active right now.
    pub fn predict(
        &self,
        features: &FeatureVector,
    ) -> Result<Vec<ConditionProbability>, ClassifierError> {
        let model = self.current()?;
        model::predict(&model, features)
    }
}
