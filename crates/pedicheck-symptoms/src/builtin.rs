//! Built-in symptom weight table.
//!
//! Every score the engine produces traces back to a row here. Severity
//! questions run 0-3, duration 0-4, context questions 0-3. Each question
//! has a weight-0 option so a fully answered symptom can score 0.

use crate::catalog::{AnswerOption, FollowUpQuestion, SymptomDefinition};

/// Static form of one symptom row.
#[derive(Debug, Clone, Copy)]
pub struct SymptomSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub questions: &'static [QuestionSpec],
}

#[derive(Debug, Clone, Copy)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub prompt: &'static str,
    /// `(label, weight)` in display order.
    pub options: &'static [(&'static str, u32)],
}

pub const TEMPERATURE_OPTIONS: &[(&str, u32)] = &[
    ("Normal", 0),
    ("Mild", 1),
    ("Moderate", 2),
    ("Severe", 3),
];

pub const SEVERITY_OPTIONS: &[(&str, u32)] = &[
    ("Minimal", 0),
    ("Mild", 1),
    ("Moderate", 2),
    ("Severe", 3),
];

pub const DURATION_OPTIONS: &[(&str, u32)] = &[
    ("Less than 1 day", 0),
    ("1-2 days", 1),
    ("2-3 days", 2),
    ("3-7 days", 3),
    ("More than 7 days", 4),
];

pub const BREATHING_OPTIONS: &[(&str, u32)] = &[
    ("Normal", 0),
    ("Slightly fast", 1),
    ("Wheezing", 2),
    ("Struggling to breathe", 3),
];

pub const RASH_APPEARANCE_OPTIONS: &[(&str, u32)] = &[
    ("Fades when pressed", 0),
    ("Raised or itchy", 1),
    ("Blistering", 2),
    ("Does not fade when pressed", 3),
];

const DURATION: QuestionSpec = QuestionSpec {
    id: "Duration",
    prompt: "How long has this been going on?",
    options: DURATION_OPTIONS,
};

const fn severity(prompt: &'static str) -> QuestionSpec {
    QuestionSpec {
        id: "Severity",
        prompt,
        options: SEVERITY_OPTIONS,
    }
}

pub const BUILTIN_SYMPTOMS: &[SymptomSpec] = &[
    SymptomSpec {
        id: "FEVER",
        label: "Fever",
        questions: &[
            QuestionSpec {
                id: "Temperature",
                prompt: "How hot does your child feel?",
                options: TEMPERATURE_OPTIONS,
            },
            DURATION,
        ],
    },
    SymptomSpec {
        id: "COUGH",
        label: "Cough",
        questions: &[
            severity("How bad is the cough?"),
            DURATION,
            QuestionSpec {
                id: "Breathing",
                prompt: "How is your child breathing?",
                options: BREATHING_OPTIONS,
            },
        ],
    },
    SymptomSpec {
        id: "RUNNY_NOSE",
        label: "Runny nose",
        questions: &[severity("How heavy is the discharge?"), DURATION],
    },
    SymptomSpec {
        id: "SORE_THROAT",
        label: "Sore throat",
        questions: &[severity("How painful is swallowing?"), DURATION],
    },
    SymptomSpec {
        id: "EAR_PAIN",
        label: "Ear pain",
        questions: &[severity("How much does the ear hurt?"), DURATION],
    },
    SymptomSpec {
        id: "RASH",
        label: "Rash",
        questions: &[
            severity("How widespread is the rash?"),
            DURATION,
            QuestionSpec {
                id: "Appearance",
                prompt: "What does the rash look like?",
                options: RASH_APPEARANCE_OPTIONS,
            },
        ],
    },
    SymptomSpec {
        id: "VOMITING",
        label: "Vomiting",
        questions: &[severity("How often is your child vomiting?"), DURATION],
    },
    SymptomSpec {
        id: "DIARRHEA",
        label: "Diarrhea",
        questions: &[severity("How frequent are the loose stools?"), DURATION],
    },
    SymptomSpec {
        id: "HEADACHE",
        label: "Headache",
        questions: &[severity("How strong is the headache?"), DURATION],
    },
    SymptomSpec {
        id: "ABDOMINAL_PAIN",
        label: "Abdominal pain",
        questions: &[severity("How strong is the tummy pain?"), DURATION],
    },
];

/// Owned definitions for [`BUILTIN_SYMPTOMS`].
pub fn definitions() -> Vec<SymptomDefinition> {
    BUILTIN_SYMPTOMS
        .iter()
        .map(|symptom| SymptomDefinition {
            id: symptom.id.to_string(),
            label: symptom.label.to_string(),
            questions: symptom
                .questions
                .iter()
                .map(|q| FollowUpQuestion {
                    id: q.id.to_string(),
                    prompt: q.prompt.to_string(),
                    options: q
                        .options
                        .iter()
                        .map(|(label, weight)| AnswerOption {
                            label: (*label).to_string(),
                            weight: *weight,
                        })
                        .collect(),
                })
                .collect(),
            description: None,
        })
        .collect()
}
