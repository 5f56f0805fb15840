use crate::error::FactsError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Format-agnostic, observable properties of one document.
///
/// Built once per validation run by an extractor and never mutated afterwards. Metadata keys
/// are trimmed and lowercased on construction so rules can look them up case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FactsRecord")]
pub struct DocumentFacts {
    filename: String,
    metadata: BTreeMap<String, String>,
    sections: Vec<String>,
}

/// Wire shape of [`DocumentFacts`] (for example a `.facts.json` sidecar).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactsRecord {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub sections: Vec<String>,
}

impl TryFrom<FactsRecord> for DocumentFacts {
    type Error = FactsError;

    fn try_from(record: FactsRecord) -> Result<Self, Self::Error> {
        if let Some(key) = duplicate_metadata_key(record.metadata.keys()) {
            return Err(FactsError::DuplicateMetadataKey(key));
        }
        Ok(DocumentFacts::new(record.filename, record.metadata, record.sections))
    }
}

/// Metadata key as stored in [`DocumentFacts`]: trimmed and lowercased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}

/// The first key that repeats once normalized, if any.
///
/// [`DocumentFacts::new`] keeps the last value for a repeated key, so extractors check this
/// first and reject the document instead.
pub fn duplicate_metadata_key<I, K>(keys: I) -> Option<String>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    keys.into_iter()
        .map(|k| normalize_key(k.as_ref()))
        .find(|k| !seen.insert(k.clone()))
}

impl DocumentFacts {
    pub fn new<I, K, V>(filename: impl Into<String>, metadata: I, sections: Vec<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let metadata = metadata
            .into_iter()
            .map(|(k, v)| (normalize_key(k.as_ref()), v.into()))
            .collect();
        Self {
            filename: filename.into(),
            metadata,
            sections,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// File name without its final extension.
    pub fn stem(&self) -> &str {
        match self.filename.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.filename,
        }
    }

    /// Final extension, lowercased, without the dot.
    pub fn extension(&self) -> Option<String> {
        match self.filename.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                Some(ext.to_ascii_lowercase())
            }
            _ => None,
        }
    }

    /// Trimmed metadata value for `key`; blank values count as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(&key.trim().to_ascii_lowercase())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_keys_are_normalized() {
        let facts = DocumentFacts::new("a.pdf", [(" Author ", "J. Smith")], Vec::new());
        assert_eq!(facts.field("author"), Some("J. Smith"));
        assert_eq!(facts.field("AUTHOR"), Some("J. Smith"));
        assert!(facts.metadata().contains_key("author"));
    }

    #[test]
    fn blank_fields_are_absent() {
        let facts = DocumentFacts::new("a.pdf", [("status", "   ")], Vec::new());
        assert_eq!(facts.field("status"), None);
    }

    #[test]
    fn stem_and_extension() {
        let facts = DocumentFacts::new(
            "PRJ01-MAC-ZZ-00-RP-A-0001.PDF",
            Vec::<(String, String)>::new(),
            Vec::new(),
        );
        assert_eq!(facts.stem(), "PRJ01-MAC-ZZ-00-RP-A-0001");
        assert_eq!(facts.extension().as_deref(), Some("pdf"));

        let dotfile = DocumentFacts::new(".hidden", Vec::<(String, String)>::new(), Vec::new());
        assert_eq!(dotfile.stem(), ".hidden");
        assert_eq!(dotfile.extension(), None);
    }

    #[test]
    fn deserialize_normalizes_keys() {
        let facts: DocumentFacts = serde_json::from_str(
            r#"{"filename":"a.pdf","metadata":{"Title":"Report"},"sections":["Scope"]}"#,
        )
        .expect("parse facts");
        assert_eq!(facts.field("title"), Some("Report"));
        assert_eq!(facts.sections(), ["Scope".to_string()]);
    }

    #[test]
    fn deserialize_rejects_keys_that_collide_after_normalizing() {
        let err = serde_json::from_str::<DocumentFacts>(
            r#"{"filename":"a.pdf","metadata":{"Title":"Survey","title":""}}"#,
        )
        .expect_err("colliding keys");
        assert!(err.to_string().contains("duplicate metadata key 'title'"), "{err}");
    }

    #[test]
    fn duplicate_keys_are_found_after_normalizing() {
        assert_eq!(
            duplicate_metadata_key(["Title", "author", " TITLE "]),
            Some("title".to_string())
        );
        assert_eq!(duplicate_metadata_key(["title", "author"]), None);
        assert_eq!(duplicate_metadata_key(Vec::<&str>::new()), None);
    }

    #[test]
    fn deserialize_defaults_missing_collections() {
        let facts: DocumentFacts =
            serde_json::from_str(r#"{"filename":"a.pdf"}"#).expect("parse facts");
        assert!(facts.metadata().is_empty());
        assert!(facts.sections().is_empty());
    }
}
