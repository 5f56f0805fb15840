//! Stable DTOs and IDs used across the docguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the validation report and its JSON envelope
//! - stable rule IDs
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod envelope;
pub mod explain;
pub mod ids;
pub mod report;

pub use envelope::{
    BatchEnvelope, DocumentMeta, ReportEnvelope, RunMeta, ToolMeta, SCHEMA_BATCH_V1,
    SCHEMA_REPORT_V1,
};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use report::{
    Category, Mode, Outcome, OutcomeCounts, RuleResult, Severity, Status, ValidationReport,
};
