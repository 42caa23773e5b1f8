use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Allowed distance between a probability sum and 1.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionProbability {
    pub condition: String,
    pub probability: f64,
}

impl ConditionProbability {
    pub fn new(condition: impl Into<String>, probability: f64) -> Self {
        Self {
            condition: condition.into(),
            probability,
        }
    }
}

/// Probability descending, then condition name ascending.
pub fn ranking_order(a: &ConditionProbability, b: &ConditionProbability) -> Ordering {
    b.probability
        .total_cmp(&a.probability)
        .then_with(|| a.condition.cmp(&b.condition))
}

pub fn rank_conditions(mut entries: Vec<ConditionProbability>) -> Vec<ConditionProbability> {
    entries.sort_by(ranking_order);
    entries
}

pub fn is_ranked(entries: &[ConditionProbability]) -> bool {
    entries
        .windows(2)
        .all(|w| ranking_order(&w[0], &w[1]) != Ordering::Greater)
}

pub fn probability_sum(entries: &[ConditionProbability]) -> f64 {
    entries.iter().map(|e| e.probability).sum()
}
