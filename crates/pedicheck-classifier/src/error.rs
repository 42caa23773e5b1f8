use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("dataset schema error: {0}")]
    DatasetSchema(String),

    #[error("no condition model has been trained")]
    ModelNotTrained,

    #[error("feature vector does not match the model: {0}")]
    FeatureMismatch(String),

    #[error("invalid training configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
