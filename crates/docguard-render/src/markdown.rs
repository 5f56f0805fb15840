use crate::{RenderableOutcome, RenderableReport, RenderableSeverity};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Docguard report\n\n");
    out.push_str(&format!(
        "- Status: **{}**\n- Documents: {}\n",
        report.status.label(),
        report.documents.len()
    ));

    for doc in &report.documents {
        out.push_str(&format!("\n## {}\n\n", escape_cell(&doc.name)));
        out.push_str(&format!(
            "- Status: **{}**\n- Mode: {}\n- Results: {}\n",
            doc.status.label(),
            doc.mode,
            doc.counts.summary()
        ));
        if let Some(size) = doc.size_label() {
            out.push_str(&format!("- Size: {size}\n"));
        }
        if let Some(digest) = &doc.digest {
            out.push_str(&format!("- Digest: `{digest}`\n"));
        }

        if doc.results.is_empty() {
            out.push_str("\nNo rules evaluated.\n");
            continue;
        }

        out.push_str("\n| Check | Category | Severity | Status | Details |\n");
        out.push_str("|---|---|---|---|---|\n");
        for r in &doc.results {
            let sev = match r.severity {
                RenderableSeverity::Info => "info",
                RenderableSeverity::Warning => "warning",
                RenderableSeverity::Error => "error",
            };
            let mut status = match r.outcome {
                RenderableOutcome::Pass => "PASS",
                RenderableOutcome::Warn => "WARN",
                RenderableOutcome::Fail => "FAIL",
                RenderableOutcome::Skipped => "SKIPPED",
            }
            .to_string();
            if r.promoted {
                status.push_str(" (promoted)");
            }
            out.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                r.rule_id,
                r.category,
                sev,
                status,
                escape_cell(r.detail.as_deref().unwrap_or(""))
            ));
        }
    }

    out
}

/// Table cells cannot hold raw pipes or newlines.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
