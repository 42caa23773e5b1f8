use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pedicheck_core::models::history::IMMUNOCOMPROMISED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SafetyConfig {
    /// Patients younger than this (in months) always get the infant flag.
    pub infant_age_months: u32,
    /// History tag that marks immune suppression.
    pub immunocompromised_tag: String,
    /// A symptom score strictly above its threshold raises a red flag.
    pub default_score_threshold: u32,
    /// Per-symptom overrides of `default_score_threshold`.
    pub score_thresholds: BTreeMap<String, u32>,
    /// Extra or replacement advice keyed by condition name.
    pub condition_advice: BTreeMap<String, String>,
}

impl SafetyConfig {
    pub fn threshold_for(&self, symptom_id: &str) -> u32 {
        self.score_thresholds
            .get(symptom_id)
            .copied()
            .unwrap_or(self.default_score_threshold)
    }
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            infant_age_months: 3,
            immunocompromised_tag: IMMUNOCOMPROMISED.to_string(),
            default_score_threshold: 5,
            score_thresholds: BTreeMap::from([
                ("COUGH".to_string(), 6),
                ("RASH".to_string(), 6),
            ]),
            condition_advice: BTreeMap::new(),
        }
    }
}
