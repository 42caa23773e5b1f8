//! Gaussian naive Bayes over symptom and history features.
//!
//! Each condition keeps a prior and, per feature, the mean and variance
//! observed in training. Prediction combines them in log space and
//! normalizes with log-sum-exp so the result is a proper distribution.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use pedicheck_core::models::features::FeatureVector;
use pedicheck_core::models::prediction::{rank_conditions, ConditionProbability};

use crate::config::TrainingConfig;
use crate::dataset::Dataset;
use crate::error::ClassifierError;

/// Floor for the variance smoothing term when every column is constant.
const MIN_VARIANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ClassStatistics {
    condition: String,
    log_prior: f64,
    means: Vec<f64>,
    variances: Vec<f64>,
}

/// A trained, immutable condition model.
///
/// The condition vocabulary is every distinct training label in
/// alphabetical order and never changes for the life of the instance.
/// Retraining yields a new model with a new `version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionModel {
    version: Uuid,
    trained_at: jiff::Timestamp,
    training_rows: usize,
    features: Vec<String>,
    classes: Vec<ClassStatistics>,
}

impl ConditionModel {
    pub fn version(&self) -> Uuid {
        self.version
    }

    pub fn trained_at(&self) -> jiff::Timestamp {
        self.trained_at
    }

    pub fn training_rows(&self) -> usize {
        self.training_rows
    }

    /// Feature columns the model was trained on, in training order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Condition names, sorted alphabetically.
    pub fn vocabulary(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.condition.as_str()).collect()
    }

    pub fn to_json(&self) -> Result<String, ClassifierError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load a serialized model, checking its internal shape.
    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let model: Self = serde_json::from_str(json)?;
        model.check_shape()?;
        Ok(model)
    }

    fn check_shape(&self) -> Result<(), ClassifierError> {
        if self.classes.is_empty() {
            return Err(ClassifierError::InvalidModel("model has no conditions".to_string()));
        }
        if !self
            .classes
            .windows(2)
            .all(|w| w[0].condition < w[1].condition)
        {
            return Err(ClassifierError::InvalidModel(
                "condition vocabulary is not sorted and unique".to_string(),
            ));
        }
        for class in &self.classes {
            if class.means.len() != self.features.len()
                || class.variances.len() != self.features.len()
            {
                return Err(ClassifierError::InvalidModel(format!(
                    "condition '{}' has statistics for the wrong number of features",
                    class.condition
                )));
            }
            if class.variances.iter().any(|v| !v.is_finite() || *v <= 0.0) {
                return Err(ClassifierError::InvalidModel(format!(
                    "condition '{}' has a non-positive variance",
                    class.condition
                )));
            }
        }
        Ok(())
    }

    fn joint_log_likelihood(&self, x: &[f64]) -> Vec<f64> {
        self.classes
            .iter()
            .map(|class| {
                let log_likelihood: f64 = x
                    .iter()
                    .zip(class.means.iter().zip(&class.variances))
                    .map(|(xi, (mean, var))| {
                        let diff = xi - mean;
                        (2.0 * PI * var).ln() + diff * diff / var
                    })
                    .sum();
                class.log_prior - 0.5 * log_likelihood
            })
            .collect()
    }
}

/// Train a model on `dataset`, expecting a label column plus every name
/// in `feature_names` as a numeric column.
pub fn train(
    dataset: &Dataset,
    feature_names: &[String],
    config: &TrainingConfig,
) -> Result<ConditionModel, ClassifierError> {
    if !config.var_smoothing.is_finite() || config.var_smoothing <= 0.0 {
        return Err(ClassifierError::InvalidConfig(format!(
            "var_smoothing must be positive, got {}",
            config.var_smoothing
        )));
    }
    if feature_names.is_empty() {
        return Err(ClassifierError::InvalidConfig(
            "at least one feature is required".to_string(),
        ));
    }

    let label_index = dataset.column_index(&config.label_column).ok_or_else(|| {
        ClassifierError::DatasetSchema(format!(
            "label column '{}' is missing",
            config.label_column
        ))
    })?;

    let missing: Vec<&str> = feature_names
        .iter()
        .filter(|f| dataset.column_index(f).is_none())
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err(ClassifierError::DatasetSchema(format!(
            "feature columns missing: {}",
            missing.join(", ")
        )));
    }
    let feature_indices: Vec<usize> = feature_names
        .iter()
        .filter_map(|f| dataset.column_index(f))
        .collect();

    if dataset.is_empty() {
        return Err(ClassifierError::DatasetSchema("dataset has no rows".to_string()));
    }

    // condition -> rows of feature values
    let mut grouped: BTreeMap<String, Vec<Vec<f64>>> = BTreeMap::new();
    for (row_index, row) in dataset.rows().iter().enumerate() {
        let label = row[label_index]
            .as_text()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| {
                ClassifierError::DatasetSchema(format!(
                    "row {row_index}: label '{}' is not a condition name",
                    config.label_column
                ))
            })?;

        let mut values = Vec::with_capacity(feature_indices.len());
        for (name, &col) in feature_names.iter().zip(&feature_indices) {
            let value = row[col].as_number().ok_or_else(|| {
                ClassifierError::DatasetSchema(format!(
                    "row {row_index}: feature '{name}' is not numeric ({:?})",
                    row[col]
                ))
            })?;
            values.push(value);
        }
        grouped.entry(label.to_string()).or_default().push(values);
    }

    let n_features = feature_names.len();
    let all_rows: Vec<&Vec<f64>> = grouped.values().flatten().collect();
    let overall_variance = column_variances(&all_rows, n_features);
    let largest = overall_variance.iter().copied().fold(0.0_f64, f64::max);
    let epsilon = (config.var_smoothing * largest).max(MIN_VARIANCE);

    let total = dataset.len() as f64;
    let classes = grouped
        .into_iter()
        .map(|(condition, rows)| {
            let refs: Vec<&Vec<f64>> = rows.iter().collect();
            let means = column_means(&refs, n_features);
            let variances = column_variances(&refs, n_features)
                .into_iter()
                .map(|v| v + epsilon)
                .collect();
            ClassStatistics {
                log_prior: (rows.len() as f64 / total).ln(),
                condition,
                means,
                variances,
            }
        })
        .collect::<Vec<_>>();

    let model = ConditionModel {
        version: Uuid::new_v4(),
        trained_at: jiff::Timestamp::now(),
        training_rows: dataset.len(),
        features: feature_names.to_vec(),
        classes,
    };

    tracing::info!(
        model_version = %model.version,
        rows = model.training_rows,
        conditions = model.classes.len(),
        features = n_features,
        "condition model trained"
    );
    Ok(model)
}

/// Probability of every condition in the model's vocabulary, highest
/// first, ties in alphabetical order.
pub fn predict(
    model: &ConditionModel,
    features: &FeatureVector,
) -> Result<Vec<ConditionProbability>, ClassifierError> {
    let missing: Vec<&str> = model
        .features
        .iter()
        .filter(|f| !features.contains(f))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        return Err(ClassifierError::FeatureMismatch(format!(
            "missing {}",
            missing.join(", ")
        )));
    }

    let mut x = Vec::with_capacity(model.features.len());
    for name in &model.features {
        match features.get(name) {
            Some(v) if v.is_finite() => x.push(v),
            other => {
                return Err(ClassifierError::FeatureMismatch(format!(
                    "feature '{name}' has unusable value {other:?}"
                )));
            }
        }
    }

    let jll = model.joint_log_likelihood(&x);
    let max = jll.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let log_norm = max + jll.iter().map(|l| (l - max).exp()).sum::<f64>().ln();

    let probabilities = model
        .classes
        .iter()
        .zip(&jll)
        .map(|(class, l)| ConditionProbability::new(&class.condition, (l - log_norm).exp()))
        .collect();

    Ok(rank_conditions(probabilities))
}

fn column_means(rows: &[&Vec<f64>], n_features: usize) -> Vec<f64> {
    let n = rows.len() as f64;
    (0..n_features)
        .map(|j| rows.iter().map(|r| r[j]).sum::<f64>() / n)
        .collect()
}

fn column_variances(rows: &[&Vec<f64>], n_features: usize) -> Vec<f64> {
    let n = rows.len() as f64;
    column_means(rows, n_features)
        .into_iter()
        .enumerate()
        .map(|(j, mean)| rows.iter().map(|r| (r[j] - mean).powi(2)).sum::<f64>() / n)
        .collect()
}
