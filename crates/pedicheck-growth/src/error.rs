use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GrowthError {
    #[error("{field} {value} is outside the supported range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
