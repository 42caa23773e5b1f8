//! Medical-history vocabulary.
//!
//! Each known tag maps to exactly one binary feature column. Tags outside
//! this table are kept on the patient snapshot but never become features.

pub const IMMUNOCOMPROMISED: &str = "Immunocompromised Status";
pub const ASTHMA: &str = "Asthma";
pub const ALLERGIES: &str = "Allergies";
pub const PREMATURE_BIRTH: &str = "Premature Birth";
pub const HEART_CONDITION: &str = "Heart Condition";

pub const IMMUNOCOMPROMISED_FEATURE: &str = "IMMUNOCOMPROMISED_FEATURE";

/// `(history tag, feature name)` pairs, in feature-column order.
pub const HISTORY_FEATURES: &[(&str, &str)] = &[
    (IMMUNOCOMPROMISED, IMMUNOCOMPROMISED_FEATURE),
    (ASTHMA, "ASTHMA_FEATURE"),
    (ALLERGIES, "ALLERGIES_FEATURE"),
    (PREMATURE_BIRTH, "PREMATURE_BIRTH_FEATURE"),
    (HEART_CONDITION, "HEART_CONDITION_FEATURE"),
];

/// Resolve the feature column for a history tag. Matching ignores ASCII
/// case and surrounding whitespace.
pub fn feature_for_tag(tag: &str) -> Option<&'static str> {
    let tag = tag.trim();
    HISTORY_FEATURES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(tag))
        .map(|(_, feature)| *feature)
}

pub fn has_tag(history: &[String], tag: &str) -> bool {
    history
        .iter()
        .any(|h| h.trim().eq_ignore_ascii_case(tag))
}

pub fn history_feature_names() -> impl Iterator<Item = &'static str> {
    HISTORY_FEATURES.iter().map(|(_, feature)| *feature)
}
