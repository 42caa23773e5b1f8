use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use pedicheck_core::models::history::has_tag;

use crate::advice::{condition_advice, GENERAL_SELF_CARE, SEEK_CARE_PROMPTLY};
use crate::config::SafetyConfig;

/// What a rule looks at.
#[derive(Debug, Clone, Copy)]
pub struct SafetyInput<'a> {
    pub age_months: u32,
    pub medical_history: &'a [String],
    pub scores: &'a BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum RuleCondition {
    AgeBelowMonths { months: u32 },
    HistoryTag { tag: String },
    ScoreAbove { symptom_id: String, threshold: u32 },
}

impl RuleCondition {
    pub fn holds(&self, input: &SafetyInput<'_>) -> bool {
        match self {
            RuleCondition::AgeBelowMonths { months } => input.age_months < *months,
            RuleCondition::HistoryTag { tag } => has_tag(input.medical_history, tag),
            RuleCondition::ScoreAbove {
                symptom_id,
                threshold,
            } => input
                .scores
                .get(symptom_id)
                .is_some_and(|score| score > threshold),
        }
    }
}

/// One red-flag rule with an optional escalation recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SafetyRule {
    pub id: String,
    pub condition: RuleCondition,
    pub red_flag: String,
    pub recommendation: Option<String>,
}

impl SafetyRule {
    pub fn fires(&self, input: &SafetyInput<'_>) -> bool {
        self.condition.holds(input)
    }
}

/// Outcome of running every rule against one patient.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SafetyAssessment {
    /// Ids of the rules that fired, in rule order.
    pub fired_rules: Vec<String>,
    pub red_flags: Vec<String>,
    /// Escalation advice; non-empty exactly when a red flag fired.
    pub escalation: Vec<String>,
}

impl SafetyAssessment {
    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

/// An ordered list of rules, evaluated one by one.
#[derive(Debug, Clone, Serialize)]
pub struct SafetyRuleSet {
    rules: Vec<SafetyRule>,
    #[serde(skip)]
    condition_advice: BTreeMap<String, String>,
}

impl SafetyRuleSet {
    pub fn new(rules: Vec<SafetyRule>) -> Self {
        Self {
            rules,
            condition_advice: BTreeMap::new(),
        }
    }

    /// The standard rules: infant age, immune suppression, then one
    /// high-severity rule per symptom in the order given.
    pub fn standard<'a, I>(config: &SafetyConfig, symptoms: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rules = vec![
            SafetyRule {
                id: "infant-age".to_string(),
                condition: RuleCondition::AgeBelowMonths {
                    months: config.infant_age_months,
                },
                red_flag: format!(
                    "Infants under {} months are at higher risk",
                    config.infant_age_months
                ),
                recommendation: Some(
                    "Any illness in a young infant should be assessed by a doctor the same day"
                        .to_string(),
                ),
            },
            SafetyRule {
                id: "immunocompromised".to_string(),
                condition: RuleCondition::HistoryTag {
                    tag: config.immunocompromised_tag.clone(),
                },
                red_flag: "Immunocompromised children are at higher risk of serious infection"
                    .to_string(),
                recommendation: Some(
                    "Contact your child's specialist team or pediatrician urgently, even for mild symptoms"
                        .to_string(),
                ),
            },
        ];

        for (symptom_id, label) in symptoms {
            rules.push(SafetyRule {
                id: format!("high-severity-{}", symptom_id.to_lowercase()),
                condition: RuleCondition::ScoreAbove {
                    symptom_id: symptom_id.to_string(),
                    threshold: config.threshold_for(symptom_id),
                },
                red_flag: format!("High {} severity reported", label.to_lowercase()),
                recommendation: None,
            });
        }

        Self {
            rules,
            condition_advice: config.condition_advice.clone(),
        }
    }

    pub fn rules(&self) -> &[SafetyRule] {
        &self.rules
    }

    pub fn evaluate(
        &self,
        age_months: u32,
        medical_history: &[String],
        scores: &BTreeMap<String, u32>,
    ) -> SafetyAssessment {
        let input = SafetyInput {
            age_months,
            medical_history,
            scores,
        };

        let mut assessment = SafetyAssessment::default();
        for rule in self.rules.iter().filter(|r| r.fires(&input)) {
            tracing::debug!(rule = %rule.id, "safety rule fired");
            assessment.fired_rules.push(rule.id.clone());
            assessment.red_flags.push(rule.red_flag.clone());
            if let Some(rec) = &rule.recommendation {
                assessment.escalation.push(rec.clone());
            }
        }

        if assessment.has_red_flags() {
            assessment.escalation.insert(0, SEEK_CARE_PROMPTLY.to_string());
        }
        assessment
    }

    /// Final recommendation list. With red flags it is the escalation
    /// advice alone and `top_condition` is ignored; otherwise advice for
    /// the top condition (when there is one) followed by general self-care.
    pub fn recommendations(
        &self,
        assessment: &SafetyAssessment,
        top_condition: Option<&str>,
    ) -> Vec<String> {
        if assessment.has_red_flags() {
            return assessment.escalation.clone();
        }

        top_condition
            .map(|c| condition_advice(c, &self.condition_advice))
            .into_iter()
            .chain(GENERAL_SELF_CARE.iter().map(|s| (*s).to_string()))
            .collect()
    }
}
