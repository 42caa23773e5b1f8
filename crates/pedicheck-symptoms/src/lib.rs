//! pedicheck-symptoms
//!
//! Symptom catalog and scoring. Pure data and arithmetic: a symptom's
//! score is the sum of the weights of the options chosen for its
//! follow-up questions, and nothing else.

pub mod builtin;
pub mod catalog;
pub mod context;
pub mod error;
pub mod features;
pub mod responses;
pub mod scoring;
pub mod selection;

pub use catalog::SymptomCatalog;
pub use context::PatientContext;
pub use error::SymptomError;
pub use responses::ResponseSet;
pub use scoring::ScoreEngine;
pub use selection::SymptomSelection;
