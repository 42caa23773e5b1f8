//! pedicheck-core
//!
//! Pure domain types shared by every pedicheck crate: the medical-history
//! vocabulary, feature vectors, ranked condition probabilities and the
//! Report handed to renderers. No scoring or model logic lives here.

pub mod error;
pub mod models;
