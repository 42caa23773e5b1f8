use serde::{Deserialize, Serialize};

pub const DEFAULT_LABEL_COLUMN: &str = "CONDITION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Column holding the condition name.
    pub label_column: String,
    /// Fraction of the largest feature variance added to every class
    /// variance, keeping constant columns usable.
    pub var_smoothing: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
            var_smoothing: 1e-9,
        }
    }
}
