use std::collections::BTreeMap;

use pedicheck_core::error::CoreError;
use pedicheck_core::models::patient::PatientInfo;
use pedicheck_core::models::prediction::ConditionProbability;
use pedicheck_core::models::report::Report;

use crate::error::ReportError;

/// Everything a Report is made of, before the timestamp is taken.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportParts {
    pub patient: PatientInfo,
    pub symptom_scores: BTreeMap<String, u32>,
    /// Ranked condition probabilities; empty when no model was available.
    pub ranked: Vec<ConditionProbability>,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn assemble(parts: ReportParts) -> Result<Report, ReportError> {
    assemble_at(parts, jiff::Timestamp::now())
}

/// Compose the Report and check its invariants as the last step.
pub fn assemble_at(parts: ReportParts, timestamp: jiff::Timestamp) -> Result<Report, ReportError> {
    let report = Report {
        top_prediction: parts.ranked.first().map(|p| p.condition.clone()),
        patient_info: parts.patient,
        symptom_scores: parts.symptom_scores,
        probabilities: parts.ranked,
        red_flags: parts.red_flags,
        recommendations: parts.recommendations,
        timestamp,
    };

    match report.check_invariants() {
        Ok(()) => Ok(report),
        Err(CoreError::InvariantViolation(msg)) => {
            tracing::error!(violation = %msg, "assembled report failed validation");
            Err(ReportError::InvariantViolation(msg))
        }
        Err(other) => Err(ReportError::InvariantViolation(other.to_string())),
    }
}
