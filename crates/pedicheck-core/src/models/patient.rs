use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Upper bound on simultaneously selected symptoms.
pub const MAX_SELECTED_SYMPTOMS: usize = 5;

/// Patient snapshot carried on a Report.
///
/// `medical_history` keeps every tag the caller supplied, including tags
/// the feature builder does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientInfo {
    pub age_months: u32,
    pub medical_history: Vec<String>,
}

impl PatientInfo {
    /// Build a snapshot, dropping blank and repeated history tags while
    /// keeping first-seen order.
    pub fn new(age_months: u32, history: impl IntoIterator<Item = String>) -> Self {
        let mut medical_history: Vec<String> = Vec::new();
        for tag in history {
            let tag = tag.trim().to_string();
            if tag.is_empty() || medical_history.iter().any(|h| h.eq_ignore_ascii_case(&tag)) {
                continue;
            }
            medical_history.push(tag);
        }
        Self {
            age_months,
            medical_history,
        }
    }
}
