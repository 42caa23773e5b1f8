use thiserror::Error;

use pedicheck_classifier::ClassifierError;
use pedicheck_symptoms::SymptomError;

#[derive(Debug, Error)]
pub enum ReportError {
    /// An upstream component produced output that breaks the report
    /// contract. This is a defect, not a user error.
    #[error("report invariant violated: {0}")]
    InvariantViolation(String),
}

#[derive(Debug, Error)]
pub enum TriageError {
    #[error(transparent)]
    Symptom(#[from] SymptomError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Report(#[from] ReportError),
}
