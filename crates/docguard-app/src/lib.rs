//! Use case orchestration for docguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, extract,
//! domain, and render layers. It stays thin and delegates real work to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;

pub use check::{check_batch, check_document, run_check, CheckInput, CheckOutput};
pub use explain::{
    format_explanation, format_not_found, format_rules, list_rules, run_explain, ExplainOutput,
    RuleSummary,
};
pub use render::{parse_format, render_report, OutputFormat};
pub use report::{
    parse_report_json, serialize_report, status_exit_code, to_renderable, verify_digests,
    ReportVariant,
};
