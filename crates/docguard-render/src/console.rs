use crate::{RenderableDocument, RenderableOutcome, RenderableReport};

const HEADER: &str = "docguard - ISO 19650 document compliance";
const COLUMNS: [&str; 3] = ["Check", "Status", "Details"];

/// Plain-text report for a terminal: one `Check | Status | Details` table per document.
pub fn render_console(report: &RenderableReport) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for doc in &report.documents {
        out.push('\n');
        render_document(&mut out, doc);
    }

    out.push('\n');
    if report.documents.len() > 1 {
        out.push_str(&format!(
            "Overall: {} ({} documents)\n",
            report.status.label(),
            report.documents.len()
        ));
    } else {
        out.push_str(&format!("Overall: {}\n", report.status.label()));
    }
    out
}

fn render_document(out: &mut String, doc: &RenderableDocument) {
    match doc.size_label() {
        Some(size) => out.push_str(&format!("Document: {} ({size})\n", doc.name)),
        None => out.push_str(&format!("Document: {}\n", doc.name)),
    }
    out.push_str(&format!("Mode: {}\n\n", doc.mode));

    let rows: Vec<[String; 3]> = doc
        .results
        .iter()
        .map(|r| {
            let mut status = status_cell(r.outcome).to_string();
            if r.promoted {
                status.push_str(" (strict)");
            }
            [
                r.rule_id.clone(),
                status,
                r.detail.as_deref().unwrap_or("").replace('\n', " "),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_row(out, &COLUMNS.map(str::to_string), &widths);
    out.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(widths[0]),
        "-".repeat(widths[1]),
        "-".repeat(widths[2])
    ));
    for row in &rows {
        push_row(out, row, &widths);
    }

    out.push_str(&format!(
        "\nStatus: {} ({})\n",
        doc.status.label(),
        doc.counts.summary()
    ));
}

fn push_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = format!(
        "{} | {} | {}",
        pad(&cells[0], widths[0]),
        pad(&cells[1], widths[1]),
        cells[2]
    );
    out.push_str(line.trim_end());
    out.push('\n');
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

fn status_cell(outcome: RenderableOutcome) -> &'static str {
    match outcome {
        RenderableOutcome::Pass => "✓ Pass",
        RenderableOutcome::Warn => "⚠ Warning",
        RenderableOutcome::Fail => "✗ Fail",
        RenderableOutcome::Skipped => "- Skipped",
    }
}
