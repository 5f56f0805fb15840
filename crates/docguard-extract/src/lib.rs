//! Filesystem adapters: turn documents on disk into [`DocumentFacts`].
//!
//! Text extraction from PDF/DOCX/XLSX is not done here. Those formats are validated from a
//! `<document>.facts.json` sidecar produced by an external extractor.

#![forbid(unsafe_code)]

mod discover;
mod error;
mod markdown;
mod sidecar;

use camino::{Utf8Path, Utf8PathBuf};
use docguard_domain::DocumentFacts;

pub use discover::discover_documents;
pub use error::ExtractionError;
pub use markdown::{parse_markdown, MarkdownExtractor};
pub use sidecar::{SidecarExtractor, SIDECAR_SUFFIX};

/// Produces document facts for one path.
pub trait Extractor {
    fn extract(&self, path: &Utf8Path) -> Result<DocumentFacts, ExtractionError>;
}

/// Picks the right extractor for a path (see [`extract`]).
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoExtractor;

impl Extractor for AutoExtractor {
    fn extract(&self, path: &Utf8Path) -> Result<DocumentFacts, ExtractionError> {
        extract(path)
    }
}

/// Extract facts from `path`.
///
/// - `*.facts.json` is read as a sidecar.
/// - Any document with a sibling `<path>.facts.json` is read from that sidecar.
/// - `.md`, `.markdown` and `.txt` are parsed directly.
/// - Anything else is [`ExtractionError::UnsupportedFormat`].
pub fn extract(path: &Utf8Path) -> Result<DocumentFacts, ExtractionError> {
    if sidecar::is_sidecar(path) {
        return SidecarExtractor.extract(path);
    }

    let sidecar = sidecar_for(path);
    if sidecar.is_file() {
        tracing::debug!(document = %path, sidecar = %sidecar, "using facts sidecar");
        return SidecarExtractor.extract(&sidecar);
    }

    let extension = path
        .extension()
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "md" | "markdown" | "txt" => MarkdownExtractor.extract(path),
        _ => Err(ExtractionError::UnsupportedFormat {
            path: path.to_owned(),
            extension,
        }),
    }
}

/// The sidecar path for a document: `<path>.facts.json`.
pub fn sidecar_for(path: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{path}{SIDECAR_SUFFIX}"))
}
