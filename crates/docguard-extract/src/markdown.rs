use crate::{ExtractionError, Extractor};
use camino::Utf8Path;
use docguard_domain::{duplicate_metadata_key, DocumentFacts};

/// Extracts facts from Markdown and plain text.
///
/// Metadata comes from a leading front matter block delimited by `---` lines holding
/// `key: value` pairs; a key repeated in any letter case is malformed. Every ATX heading
/// outside fenced code blocks is a section title.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownExtractor;

impl Extractor for MarkdownExtractor {
    fn extract(&self, path: &Utf8Path) -> Result<DocumentFacts, ExtractionError> {
        let text = std::fs::read_to_string(path).map_err(|source| ExtractionError::Io {
            path: path.to_owned(),
            source,
        })?;
        let filename = path.file_name().unwrap_or(path.as_str());
        parse_markdown(filename, &text).map_err(|reason| ExtractionError::Malformed {
            path: path.to_owned(),
            reason,
        })
    }
}

/// Parse Markdown/text content into facts for `filename`.
pub fn parse_markdown(filename: &str, text: &str) -> Result<DocumentFacts, String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().peekable();
    let mut metadata: Vec<(String, String)> = Vec::new();

    if lines.peek().is_some_and(|l| l.trim_end() == "---") {
        lines.next();
        let mut closed = false;
        for line in lines.by_ref() {
            let line = line.trim_end();
            if line == "---" || line == "..." {
                closed = true;
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                let key = key.trim();
                if !key.is_empty() && !key.starts_with('#') {
                    metadata.push((key.to_string(), unquote(value.trim()).to_string()));
                }
            }
        }
        if !closed {
            return Err("front matter is not closed with '---'".to_string());
        }
        if let Some(key) = duplicate_metadata_key(metadata.iter().map(|(k, _)| k)) {
            return Err(format!("duplicate metadata key '{key}'"));
        }
    }

    let mut sections = Vec::new();
    let mut in_fence = false;
    for line in lines {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(title) = atx_heading(line).filter(|t| !t.is_empty()) {
            sections.push(title.to_string());
        }
    }

    Ok(DocumentFacts::new(filename, metadata, sections))
}

/// Title of an ATX heading: up to three spaces of indent, one to six `#`, then whitespace or
/// end of line. An optional closing `#` run is dropped when it stands apart from the title.
fn atx_heading(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let rest = &line[indent..];
    let level = rest.len() - rest.trim_start_matches('#').len();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &rest[level..];
    if rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
        return None;
    }

    let title = rest.trim();
    let without_closing = title.trim_end_matches('#');
    if without_closing.is_empty() || without_closing.ends_with([' ', '\t']) {
        Some(without_closing.trim_end())
    } else {
        Some(title)
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_and_headings() {
        let text = "---\nTitle: \"Ground Investigation Report\"\nauthor: J. Smith\nstatus: S2\nrevision: P01\n---\n\n# Ground Investigation Report\n\n## 1. Introduction\nText.\n## 2. Scope ##\n";
        let facts = parse_markdown("PRJ01-MAC-ZZ-00-RP-A-0001.md", text).expect("parse");

        assert_eq!(facts.field("title"), Some("Ground Investigation Report"));
        assert_eq!(facts.field("revision"), Some("P01"));
        assert_eq!(
            facts.sections(),
            ["Ground Investigation Report", "1. Introduction", "2. Scope"]
        );
    }

    #[test]
    fn no_front_matter_means_no_metadata() {
        let facts = parse_markdown("a.txt", "title: not metadata\n# Scope\n").expect("parse");
        assert!(facts.metadata().is_empty());
        assert_eq!(facts.sections(), ["Scope"]);
    }

    #[test]
    fn fenced_code_is_ignored() {
        let text = "# Findings\n```sh\n# not a heading\n```\n# Conclusion\n";
        let facts = parse_markdown("a.md", text).expect("parse");
        assert_eq!(facts.sections(), ["Findings", "Conclusion"]);
    }

    #[test]
    fn empty_headings_are_skipped() {
        let facts = parse_markdown("a.md", "#\n##   \n# Scope\n").expect("parse");
        assert_eq!(facts.sections(), ["Scope"]);
    }

    #[test]
    fn only_atx_headings_are_sections() {
        let text = "# Scope\nSee #123 for context.\n#hashtag\n    # indented code\n";
        let facts = parse_markdown("a.md", text).expect("parse");
        assert_eq!(facts.sections(), ["Scope"]);

        let text = "   # Three spaces\n####### Seven\n###### Six\n\t# Tabbed\n";
        let facts = parse_markdown("a.md", text).expect("parse");
        assert_eq!(facts.sections(), ["Three spaces", "Six"]);
    }

    #[test]
    fn closing_hashes_must_stand_apart() {
        let facts = parse_markdown("a.md", "## Notes on C#\n# Scope #\n# ##\n").expect("parse");
        assert_eq!(facts.sections(), ["Notes on C#", "Scope"]);
    }

    #[test]
    fn repeated_front_matter_key_is_malformed() {
        let text = "---\nTitle: Survey\ntitle:\n---\n# Scope\n";
        let err = parse_markdown("a.md", text).expect_err("repeated key");
        assert_eq!(err, "duplicate metadata key 'title'");
    }

    #[test]
    fn unclosed_front_matter_is_malformed() {
        let err = parse_markdown("a.md", "---\ntitle: x\n# Scope\n").expect_err("unclosed");
        assert!(err.contains("front matter"));
    }

    #[test]
    fn empty_document_has_no_facts() {
        let facts = parse_markdown("a.md", "").expect("parse");
        assert!(facts.metadata().is_empty());
        assert!(facts.sections().is_empty());
    }
}
