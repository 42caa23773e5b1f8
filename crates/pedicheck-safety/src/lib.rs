//! pedicheck-safety
//!
//! Deterministic safety rules. Red flags come from age, medical history
//! and symptom scores only; the classifier is never consulted, so the
//! same warnings appear whether or not a condition model is loaded.

pub mod advice;
pub mod config;
pub mod rules;

pub use config::SafetyConfig;
pub use rules::{RuleCondition, SafetyAssessment, SafetyInput, SafetyRule, SafetyRuleSet};
