use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymptomError {
    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),

    #[error("selected {requested} symptoms, at most {max} are allowed")]
    SelectionLimitExceeded { requested: usize, max: usize },

    #[error("missing answer to '{question_id}' for symptom '{symptom_id}'")]
    MissingResponse {
        symptom_id: String,
        question_id: String,
    },

    #[error("'{answer}' is not an option of '{question_id}' for symptom '{symptom_id}'")]
    UnknownAnswer {
        symptom_id: String,
        question_id: String,
        answer: String,
    },

    #[error("invalid symptom catalog: {0}")]
    InvalidCatalog(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
