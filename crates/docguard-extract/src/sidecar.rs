use crate::{ExtractionError, Extractor};
use camino::Utf8Path;
use docguard_domain::{DocumentFacts, FactsRecord};

/// File name suffix of a pre-extracted facts file.
pub const SIDECAR_SUFFIX: &str = ".facts.json";

/// Reads a `<document>.facts.json` file.
///
/// A missing or empty `filename` defaults to the document name, i.e. the sidecar's file name
/// with the suffix removed. Metadata keys that collide once trimmed and lowercased are rejected
/// as malformed.
#[derive(Clone, Copy, Debug, Default)]
pub struct SidecarExtractor;

impl Extractor for SidecarExtractor {
    fn extract(&self, path: &Utf8Path) -> Result<DocumentFacts, ExtractionError> {
        let text = std::fs::read_to_string(path).map_err(|source| ExtractionError::Io {
            path: path.to_owned(),
            source,
        })?;
        let mut record: FactsRecord =
            serde_json::from_str(&text).map_err(|e| ExtractionError::Malformed {
                path: path.to_owned(),
                reason: format!("invalid facts JSON: {e}"),
            })?;

        if record.filename.trim().is_empty() {
            record.filename = document_name(path).unwrap_or_default().to_string();
        }
        tracing::debug!(sidecar = %path, filename = %record.filename, "read facts sidecar");
        DocumentFacts::try_from(record).map_err(|e| ExtractionError::Malformed {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }
}

pub(crate) fn is_sidecar(path: &Utf8Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.len() > SIDECAR_SUFFIX.len() && name.ends_with(SIDECAR_SUFFIX))
}

/// `report.pdf.facts.json` -> `report.pdf`.
pub(crate) fn document_name(path: &Utf8Path) -> Option<&str> {
    path.file_name()?.strip_suffix(SIDECAR_SUFFIX)
}
