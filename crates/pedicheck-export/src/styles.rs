use serde::{Deserialize, Serialize};

/// Fonts, sizes and colours for DOCX exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyles {
    pub body_font: String,
    pub heading_font: String,
    /// Points.
    pub body_size: usize,
    pub title_size: usize,
    pub section_size: usize,
    /// Hex RGB used for the red-flag section, e.g. "C00000".
    pub warning_color: String,
}

impl Default for ReportStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri Light".to_string(),
            body_size: 11,
            title_size: 18,
            section_size: 14,
            warning_color: "C00000".to_string(),
        }
    }
}
