//! Render use case: turn a report into bytes for a chosen output format.

use crate::report::{serialize_report, to_renderable, ReportVariant};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Markdown,
    Html,
    Json,
}

pub fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v {
        "console" | "text" => Ok(OutputFormat::Console),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        "json" => Ok(OutputFormat::Json),
        other => anyhow::bail!("unknown format: {other} (expected console|markdown|html|json)"),
    }
}

pub fn render_report(report: &ReportVariant, format: OutputFormat) -> anyhow::Result<Vec<u8>> {
    let text = match format {
        OutputFormat::Json => {
            let mut bytes = serialize_report(report)?;
            bytes.push(b'\n');
            return Ok(bytes);
        }
        OutputFormat::Console => docguard_render::render_console(&to_renderable(report)),
        OutputFormat::Markdown => docguard_render::render_markdown(&to_renderable(report)),
        OutputFormat::Html => docguard_render::render_html(&to_renderable(report)),
    };
    Ok(text.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::sample_envelope;

    #[test]
    fn parse_known_formats() {
        assert_eq!(parse_format("md").expect("md"), OutputFormat::Markdown);
        assert_eq!(parse_format("json").expect("json"), OutputFormat::Json);
        assert!(parse_format("sarif").is_err());
    }

    #[test]
    fn every_format_renders() {
        let report = ReportVariant::Single(sample_envelope("PRJ01-MAC-ZZ-00-RP-A-0001.md"));
        for (format, marker) in [
            (OutputFormat::Console, "docguard - ISO 19650 document compliance"),
            (OutputFormat::Markdown, "# Docguard report"),
            (OutputFormat::Html, "<!DOCTYPE html>"),
            (OutputFormat::Json, "\"digest\""),
        ] {
            let bytes = render_report(&report, format).expect("render");
            let text = String::from_utf8(bytes).expect("utf8");
            assert!(text.contains(marker), "{format:?} output missing {marker}");
        }
    }

    #[test]
    fn rendering_is_byte_identical_for_equal_reports() {
        let report = ReportVariant::Single(sample_envelope("notes.md"));
        for format in [OutputFormat::Console, OutputFormat::Markdown, OutputFormat::Html] {
            assert_eq!(
                render_report(&report, format).expect("render"),
                render_report(&report.clone(), format).expect("render")
            );
        }
    }
}
