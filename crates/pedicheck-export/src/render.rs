use serde::Serialize;
use tera::{Context, Tera};

use pedicheck_core::models::report::Report;

use crate::error::ExportError;

const TEMPLATE_NAME: &str = "report.md";

/// Section headings the DOCX builder styles specially.
pub const RED_FLAGS_HEADING: &str = "## Red flags";

pub const DEFAULT_TEMPLATE: &str = r#"# Pediatric Symptom Report

Generated {{ generated }}

## Patient
- **Age:** {{ age }}
- **Medical history:** {% if history %}{{ history | join(sep=", ") }}{% else %}none reported{% endif %}

## Symptoms
{% if symptoms %}{% for s in symptoms %}- {{ s.id }}: score {{ s.score }}
{% endfor %}{% else %}- none selected
{% endif %}
## Likely conditions
{% if top_prediction %}Most likely: **{{ top_prediction }}**

{% for p in probabilities %}- {{ p.condition }}: {{ p.percent }}
{% endfor %}{% else %}No condition model was available for this report.
{% endif %}
{% if red_flags %}## Red flags
{% for flag in red_flags %}- {{ flag }}
{% endfor %}
{% endif %}## Recommendations
{% for rec in recommendations %}- {{ rec }}
{% endfor %}
---
This report is informational and is not a medical diagnosis.
"#;

#[derive(Debug, Serialize)]
struct SymptomLine<'a> {
    id: &'a str,
    score: u32,
}

#[derive(Debug, Serialize)]
struct ProbabilityLine<'a> {
    condition: &'a str,
    percent: String,
}

/// Template context. Everything here is derived from the Report alone.
#[derive(Debug, Serialize)]
struct ReportView<'a> {
    generated: String,
    age: String,
    history: &'a [String],
    symptoms: Vec<SymptomLine<'a>>,
    top_prediction: Option<&'a str>,
    probabilities: Vec<ProbabilityLine<'a>>,
    red_flags: &'a [String],
    recommendations: &'a [String],
}

impl<'a> ReportView<'a> {
    fn new(report: &'a Report) -> Self {
        Self {
            generated: report.timestamp.strftime("%Y-%m-%d %H:%M UTC").to_string(),
            age: describe_age(report.patient_info.age_months),
            history: &report.patient_info.medical_history,
            symptoms: report
                .symptom_scores
                .iter()
                .map(|(id, score)| SymptomLine { id, score: *score })
                .collect(),
            top_prediction: report.top_prediction.as_deref(),
            probabilities: report
                .probabilities
                .iter()
                .map(|p| ProbabilityLine {
                    condition: &p.condition,
                    percent: format!("{:.1}%", p.probability * 100.0),
                })
                .collect(),
            red_flags: &report.red_flags,
            recommendations: &report.recommendations,
        }
    }
}

/// "7 months", "1 year", "2 years 3 months".
pub fn describe_age(age_months: u32) -> String {
    let plural = |n: u32, unit: &str| {
        if n == 1 {
            format!("1 {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };
    let (years, months) = (age_months / 12, age_months % 12);
    match (years, months) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}

/// Markdown renderer backed by a single Tera template.
#[derive(Debug)]
pub struct ReportRenderer {
    tera: Tera,
}

impl ReportRenderer {
    pub fn new() -> Result<Self, ExportError> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Use a custom template (Jinja2 syntax). It sees the same variables as
    /// the default one.
    pub fn with_template(template_content: &str) -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, template_content)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    pub fn render_markdown(&self, report: &Report) -> Result<String, ExportError> {
        let value = serde_json::to_value(ReportView::new(report))?;
        let context =
            Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}
