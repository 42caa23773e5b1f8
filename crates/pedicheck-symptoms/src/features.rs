use std::collections::BTreeMap;

use pedicheck_core::models::features::{score_feature_name, FeatureVector};
use pedicheck_core::models::history::feature_for_tag;

use crate::catalog::SymptomCatalog;

/// Lay scores and history over a zeroed vector covering every catalog
/// feature. Unrecognised history tags contribute nothing.
pub fn from_scores(
    catalog: &SymptomCatalog,
    scores: &BTreeMap<String, u32>,
    medical_history: &[String],
) -> FeatureVector {
    let mut vector = FeatureVector::zeroed(catalog.feature_names());

    for (symptom_id, score) in scores {
        vector = vector.with(score_feature_name(symptom_id), f64::from(*score));
    }

    for tag in medical_history {
        match feature_for_tag(tag) {
            Some(feature) => vector = vector.with(feature, 1.0),
            None => tracing::debug!(tag = %tag, "history tag has no feature column"),
        }
    }

    vector
}
