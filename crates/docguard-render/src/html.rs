use crate::{RenderableOutcome, RenderableReport, RenderableStatus};

const STYLE: &str = "body{font-family:sans-serif;margin:2em}\
table{border-collapse:collapse}\
th,td{border:1px solid #ccc;padding:4px 8px;text-align:left}\
.pass{color:#1a7f37}.warn{color:#9a6700}.fail{color:#cf222e}.skipped{color:#6e7781}";

/// Self-contained HTML page (inline CSS, no external assets).
pub fn render_html(report: &RenderableReport) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Docguard report</title>\n");
    out.push_str(&format!("<style>{STYLE}</style>\n"));
    out.push_str("</head>\n<body>\n<h1>Docguard report</h1>\n");
    out.push_str(&format!(
        "<p>Status: <strong class=\"{}\">{}</strong> &middot; Documents: {}</p>\n",
        status_class(report.status),
        report.status.label(),
        report.documents.len()
    ));

    for doc in &report.documents {
        out.push_str(&format!("<section>\n<h2>{}</h2>\n<ul>\n", escape(&doc.name)));
        out.push_str(&format!(
            "<li>Status: <strong class=\"{}\">{}</strong></li>\n",
            status_class(doc.status),
            doc.status.label()
        ));
        out.push_str(&format!("<li>Mode: {}</li>\n", escape(&doc.mode)));
        out.push_str(&format!("<li>Results: {}</li>\n", doc.counts.summary()));
        if let Some(size) = doc.size_label() {
            out.push_str(&format!("<li>Size: {size}</li>\n"));
        }
        if let Some(digest) = &doc.digest {
            out.push_str(&format!("<li>Digest: <code>{}</code></li>\n", escape(digest)));
        }
        out.push_str("</ul>\n<table>\n<tr><th>Check</th><th>Status</th><th>Details</th></tr>\n");

        for r in &doc.results {
            let (class, label) = match r.outcome {
                RenderableOutcome::Pass => ("pass", "Pass"),
                RenderableOutcome::Warn => ("warn", "Warning"),
                RenderableOutcome::Fail => ("fail", "Fail"),
                RenderableOutcome::Skipped => ("skipped", "Skipped"),
            };
            let promoted = if r.promoted { " (strict)" } else { "" };
            out.push_str(&format!(
                "<tr><td><code>{}</code></td><td class=\"{class}\">{label}{promoted}</td><td>{}</td></tr>\n",
                escape(&r.rule_id),
                escape(r.detail.as_deref().unwrap_or(""))
            ));
        }
        out.push_str("</table>\n</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn status_class(status: RenderableStatus) -> &'static str {
    match status {
        RenderableStatus::Pass => "pass",
        RenderableStatus::Warn => "warn",
        RenderableStatus::Fail => "fail",
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::failing_report;

    #[test]
    fn renders_a_complete_page() {
        let html = render_html(&failing_report());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert!(html.contains("<h2>PRJ01-MAC-ZZ-00-RP-A-0001.md</h2>"));
        assert!(html.contains("<strong class=\"fail\">FAIL</strong>"));
        assert!(html.contains("<td class=\"fail\">Fail (strict)</td>"));
        assert!(html.contains("<td class=\"skipped\">Skipped</td>"));
    }

    #[test]
    fn content_is_escaped() {
        let html = render_html(&failing_report());
        assert!(html.contains("unknown suitability status &#39;X&lt;1&gt;&#39;"));
        assert!(!html.contains("X<1>"));
    }

    #[test]
    fn escape_handles_every_special_character() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
