use std::collections::BTreeMap;

pub const SEEK_CARE_PROMPTLY: &str =
    "Seek medical care promptly: contact your pediatrician or visit urgent care today";

/// Self-care guidance appended whenever no red flag fired.
pub const GENERAL_SELF_CARE: &[&str] = &[
    "Keep your child well hydrated with small, frequent drinks",
    "Make sure your child gets plenty of rest",
    "Contact your pediatrician if symptoms worsen or new symptoms appear",
];

const CONDITION_ADVICE: &[(&str, &str)] = &[
    (
        "Common Cold",
        "A common cold usually clears within 7-10 days; saline drops can ease a blocked nose",
    ),
    (
        "Flu",
        "Flu can cause several days of fever; paracetamol or ibuprofen can help with discomfort",
    ),
    (
        "Gastroenteritis",
        "Offer oral rehydration solution in small sips and watch for signs of dehydration",
    ),
    (
        "Ear Infection",
        "Many ear infections settle in 2-3 days; pain relief helps while they do",
    ),
    (
        "Strep Throat",
        "Strep throat needs a throat swab; see your pediatrician to confirm and treat it",
    ),
    (
        "Bronchiolitis",
        "Watch breathing closely; fast breathing or poor feeding needs a same-day review",
    ),
    (
        "Croup",
        "Cool night air or a steamy bathroom can ease a barking cough; seek help for noisy breathing at rest",
    ),
    (
        "Viral Rash",
        "Most viral rashes fade on their own; check that the rash fades when pressed",
    ),
    (
        "Migraine",
        "Rest in a dark, quiet room and keep a diary of headache triggers",
    ),
];

/// Advice for the top-ranked condition. Configured entries win over the
/// built-in table; names match ignoring ASCII case.
pub fn condition_advice(condition: &str, overrides: &BTreeMap<String, String>) -> String {
    overrides
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(condition))
        .map(|(_, advice)| advice.clone())
        .or_else(|| {
            CONDITION_ADVICE
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(condition))
                .map(|(_, advice)| (*advice).to_string())
        })
        .unwrap_or_else(|| {
            format!("Symptoms are most consistent with {condition}; monitor them and talk to your pediatrician if you are worried")
        })
}
