//! pedicheck-classifier
//!
//! Condition classifier. Training turns a labelled case table into an
//! immutable [`ConditionModel`]; prediction maps a feature vector onto a
//! probability for every condition in the model's vocabulary. The
//! [`ModelRegistry`] is the one place a model is swapped at runtime.

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod registry;

pub use config::TrainingConfig;
pub use dataset::{Cell, Dataset};
pub use error::ClassifierError;
pub use model::{predict, train, ConditionModel};
pub use registry::ModelRegistry;
