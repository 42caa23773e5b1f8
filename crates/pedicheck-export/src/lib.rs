//! pedicheck-export
//!
//! Human-readable renderings of a triage Report: Markdown through a Tera
//! template, and DOCX built from that Markdown.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;

use serde::{Deserialize, Serialize};

use pedicheck_core::models::report::Report;

pub use error::ExportError;
pub use render::ReportRenderer;
pub use styles::ReportStyles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Markdown,
    Docx,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Docx => "docx",
        }
    }
}

/// Render `report` in the requested format.
pub fn export_report(
    renderer: &ReportRenderer,
    report: &Report,
    format: ExportFormat,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let markdown = renderer.render_markdown(report)?;
    let bytes = match format {
        ExportFormat::Markdown => markdown.into_bytes(),
        ExportFormat::Docx => docx::generate_docx(&markdown, styles)?,
    };
    tracing::debug!(?format, bytes = bytes.len(), "report exported");
    Ok(bytes)
}
