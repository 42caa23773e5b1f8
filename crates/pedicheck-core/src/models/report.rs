use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::patient::PatientInfo;
use crate::models::prediction::{
    is_ranked, probability_sum, ConditionProbability, PROBABILITY_TOLERANCE,
};

/// The composed output of one triage interaction.
///
/// This is the renderer contract: the UI panel and the document generator
/// build exclusively from these fields. `top_prediction` is `None` and
/// `probabilities` empty when no condition model was available; red flags
/// and recommendations are always populated by the safety rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Report {
    pub patient_info: PatientInfo,
    pub symptom_scores: BTreeMap<String, u32>,
    pub top_prediction: Option<String>,
    pub probabilities: Vec<ConditionProbability>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
    pub timestamp: jiff::Timestamp,
}

impl Report {
    /// Check the probability and ordering invariants.
    pub fn check_invariants(&self) -> Result<(), CoreError> {
        if self.probabilities.is_empty() {
            if let Some(top) = &self.top_prediction {
                return Err(CoreError::InvariantViolation(format!(
                    "top prediction '{top}' present without probabilities"
                )));
            }
            return Ok(());
        }

        let sum = probability_sum(&self.probabilities);
        if !sum.is_finite() || (sum - 1.0).abs() > PROBABILITY_TOLERANCE {
            return Err(CoreError::InvariantViolation(format!(
                "probabilities sum to {sum}, expected 1"
            )));
        }

        if let Some(bad) = self
            .probabilities
            .iter()
            .find(|p| !(0.0..=1.0 + PROBABILITY_TOLERANCE).contains(&p.probability))
        {
            return Err(CoreError::InvariantViolation(format!(
                "probability {} for '{}' is outside [0, 1]",
                bad.probability, bad.condition
            )));
        }

        if !is_ranked(&self.probabilities) {
            return Err(CoreError::InvariantViolation(
                "probabilities are not sorted descending with alphabetical tie-break".to_string(),
            ));
        }

        let first = &self.probabilities[0].condition;
        if self.top_prediction.as_deref() != Some(first.as_str()) {
            return Err(CoreError::InvariantViolation(format!(
                "top prediction {:?} does not match highest-ranked condition '{first}'",
                self.top_prediction
            )));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
