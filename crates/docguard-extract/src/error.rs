use camino::Utf8PathBuf;

/// Why facts could not be produced for a document.
///
/// Raised before the engine runs; a document either yields complete facts or an error.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "unsupported document format '{extension}' for {path} (supported: .md, .markdown, .txt; \
         other formats need a {path}.facts.json sidecar)"
    )]
    UnsupportedFormat {
        path: Utf8PathBuf,
        extension: String,
    },

    #[error("malformed document {path}: {reason}")]
    Malformed { path: Utf8PathBuf, reason: String },
}
