use thiserror::Error;

#[derive(Debug, Error)]
pub enum FacilityError {
    #[error("invalid search area: {0}")]
    InvalidArea(String),

    #[error("facility lookup failed: {0}")]
    Http(String),

    #[error("unexpected facility response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<ureq::Error> for FacilityError {
    fn from(e: ureq::Error) -> Self {
        FacilityError::Http(e.to_string())
    }
}
