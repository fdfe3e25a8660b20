//! Printable recovery plan.
//!
//! Renders the plan as a standalone HTML page: every section expanded,
//! every field flattened to `Label: value`, and a script that opens the
//! browser's print dialog once the page loads.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use widgets::recovery::RecoveryPlan;

pub const TITLE: &str = "Recovery Plan";
pub const DEFAULT_FILE: &str = "recovery-plan.html";

const STYLES: &str = "  <style>
    :root { color-scheme: light dark; }
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; line-height: 1.5; padding: 24px; }
    h1 { margin: 0 0 .5rem; font-size: 1.6rem; }
    .meta { color: #666; font-size: .95rem; margin-bottom: 1rem; }
    .print-field { margin: .25rem 0; }
    .print-field strong { font-weight: 600; }
    .print-value { white-space: pre-wrap; }
    details { margin: 12px 0; }
    summary { font-weight: 600; margin-bottom: 6px; }
    @media print { body { padding: 0; } }
  </style>
";

const AUTO_PRINT: &str = "<script>window.onload=function(){setTimeout(function(){window.print();},120);};</script>";

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl crate::error::ErrorCode for PrintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Write { .. } => "E_PRINT_WRITE",
        }
    }
}

/// Full HTML document for `plan`, stamped with `generated_at`.
#[must_use]
pub fn render_plan(plan: &RecoveryPlan, generated_at: &str) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!doctype html>\n<html><head><meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{TITLE}</title>");
    html.push_str(STYLES);
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "  <h1>{TITLE}</h1>");
    let _ = writeln!(html, "  <div class=\"meta\">Generated on {}</div>", escape(generated_at));
    html.push_str("  <section id=\"recovery-plan\">\n");
    for section in &plan.sections {
        let _ = writeln!(html, "    <details open><summary>{}</summary>", escape(&section.title));
        for field in &section.fields {
            let _ = writeln!(
                html,
                "      <div class=\"print-field\"><strong>{}:</strong> <span class=\"print-value\">{}</span></div>",
                escape(field.printable_label()),
                escape(field.printable_value())
            );
        }
        html.push_str("    </details>\n");
    }
    html.push_str("  </section>\n  ");
    html.push_str(AUTO_PRINT);
    html.push_str("\n</body></html>\n");
    html
}

/// Write the rendered plan to `path`.
///
/// # Errors
///
/// Returns [`PrintError::Write`] when the file cannot be written.
pub fn write_plan(plan: &RecoveryPlan, generated_at: &str, path: &Path) -> Result<(), PrintError> {
    std::fs::write(path, render_plan(plan, generated_at))
        .map_err(|source| PrintError::Write { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), "recovery plan written");
    Ok(())
}

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "print_test.rs"]
mod tests;
