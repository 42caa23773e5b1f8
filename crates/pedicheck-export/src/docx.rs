use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::render::RED_FLAGS_HEADING;
use crate::styles::ReportStyles;

/// Build a DOCX document from rendered report Markdown.
///
/// Understands the subset the report template emits: `#`/`##` headings,
/// `- ` bullets, `**bold**` runs and `---` as a horizontal break. Bullets
/// under the red-flag heading are coloured with `warning_color`.
pub fn generate_docx(markdown: &str, styles: &ReportStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.section_size));

    let mut in_red_flags = false;
    for line in markdown.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("## ") {
            in_red_flags = trimmed == RED_FLAGS_HEADING;
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1", styles));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Title", styles));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            let color = in_red_flags.then_some(styles.warning_color.as_str());
            docx = docx.add_paragraph(bullet_paragraph(text, styles, color));
        } else if trimmed == "---" {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::TextWrapping)),
            );
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &ReportStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &ReportStyles, color: Option<&str>) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(match color {
            Some(c) => run.color(c),
            None => run,
        });
    }
    para
}

fn body_paragraph(text: &str, styles: &ReportStyles) -> Paragraph {
    parse_inline(text, styles)
        .into_iter()
        .fold(Paragraph::new().align(AlignmentType::Left), |p, run| p.add_run(run))
}

fn body_run(text: &str, styles: &ReportStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` segments out of a line. An unclosed marker is kept as
/// literal text.
fn parse_inline(text: &str, styles: &ReportStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let Some(len) = remaining[start + 2..].find("**") else {
            break;
        };
        if start > 0 {
            runs.push(body_run(&remaining[..start], styles));
        }
        let bold = &remaining[start + 2..start + 2 + len];
        runs.push(body_run(bold, styles).bold());
        remaining = &remaining[start + 2 + len + 2..];
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }
    runs
}
