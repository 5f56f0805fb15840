use crate::report::{Status, ValidationReport};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers for docguard artifacts.
pub const SCHEMA_REPORT_V1: &str = "docguard.report.v1";
pub const SCHEMA_BATCH_V1: &str = "docguard.batch.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Where the validated facts came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DocumentMeta {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// A persisted validation report.
///
/// Only `run` varies between identical runs; `report` and `digest` are reproducible and form
/// the compliance evidence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub document: DocumentMeta,
    pub report: ValidationReport,
    /// Lowercase hex SHA-256 of the canonical JSON of `report`.
    pub digest: String,
}

/// Reports for every document validated in one directory run, ordered by document path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    /// Worst status across `documents`.
    pub status: Status,
    pub documents: Vec<ReportEnvelope>,
}
