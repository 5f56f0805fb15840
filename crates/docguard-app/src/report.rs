use anyhow::Context;
use docguard_render::{
    RenderableCounts, RenderableDocument, RenderableOutcome, RenderableReport, RenderableResult,
    RenderableSeverity, RenderableStatus,
};
use docguard_types::{
    BatchEnvelope, Outcome, ReportEnvelope, SCHEMA_BATCH_V1, SCHEMA_REPORT_V1, Severity, Status,
};

/// A persisted report: one document or a directory batch.
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum ReportVariant {
    Single(ReportEnvelope),
    Batch(BatchEnvelope),
}

impl ReportVariant {
    /// Worst status across all documents.
    pub fn status(&self) -> Status {
        match self {
            ReportVariant::Single(r) => r.report.overall_status(),
            ReportVariant::Batch(b) => b.status,
        }
    }

    pub fn envelopes(&self) -> &[ReportEnvelope] {
        match self {
            ReportVariant::Single(r) => std::slice::from_ref(r),
            ReportVariant::Batch(b) => &b.documents,
        }
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportVariant> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    match schema.as_str() {
        SCHEMA_REPORT_V1 => {
            let report: ReportEnvelope =
                serde_json::from_value(value).context("parse docguard report")?;
            Ok(ReportVariant::Single(report))
        }
        SCHEMA_BATCH_V1 => {
            let report: BatchEnvelope =
                serde_json::from_value(value).context("parse docguard batch report")?;
            Ok(ReportVariant::Batch(report))
        }
        _ => anyhow::bail!(
            "unknown report schema: {schema} (expected {SCHEMA_REPORT_V1} or {SCHEMA_BATCH_V1})"
        ),
    }
}

pub fn serialize_report(report: &ReportVariant) -> anyhow::Result<Vec<u8>> {
    match report {
        ReportVariant::Single(r) => serde_json::to_vec_pretty(r).context("serialize report"),
        ReportVariant::Batch(r) => serde_json::to_vec_pretty(r).context("serialize batch report"),
    }
}

/// Recompute each document digest and compare it with the stored one.
pub fn verify_digests(report: &ReportVariant) -> anyhow::Result<()> {
    for envelope in report.envelopes() {
        let actual = docguard_domain::digest::digest(&envelope.report).context("digest report")?;
        if actual != envelope.digest {
            anyhow::bail!(
                "digest mismatch for {}: stored {}, computed {actual}",
                envelope.document.path,
                envelope.digest
            );
        }
    }
    Ok(())
}

/// Map overall status to exit code: 0 = pass/warn, 2 = fail.
pub fn status_exit_code(status: Status) -> i32 {
    match status {
        Status::Pass => 0,
        Status::Warn => 0,
        Status::Fail => 2,
    }
}

pub fn to_renderable(report: &ReportVariant) -> RenderableReport {
    RenderableReport {
        status: renderable_status(report.status()),
        documents: report.envelopes().iter().map(renderable_document).collect(),
    }
}

fn renderable_document(envelope: &ReportEnvelope) -> RenderableDocument {
    let report = &envelope.report;
    let counts = report.counts();
    RenderableDocument {
        name: report.document().to_string(),
        size_bytes: envelope.document.size_bytes,
        mode: report.mode().as_str().to_string(),
        status: renderable_status(report.overall_status()),
        counts: RenderableCounts {
            pass: counts.pass,
            warn: counts.warn,
            fail: counts.fail,
            skipped: counts.skipped,
        },
        results: report
            .results()
            .iter()
            .map(|r| RenderableResult {
                rule_id: r.rule_id.clone(),
                category: r.category.as_str().to_string(),
                severity: match r.severity {
                    Severity::Info => RenderableSeverity::Info,
                    Severity::Warning => RenderableSeverity::Warning,
                    Severity::Error => RenderableSeverity::Error,
                },
                outcome: match r.outcome {
                    Outcome::Pass => RenderableOutcome::Pass,
                    Outcome::Warn => RenderableOutcome::Warn,
                    Outcome::Fail => RenderableOutcome::Fail,
                    Outcome::Skipped => RenderableOutcome::Skipped,
                },
                detail: r.detail.clone(),
                promoted: r.promoted,
            })
            .collect(),
        digest: Some(envelope.digest.clone()),
    }
}

fn renderable_status(status: Status) -> RenderableStatus {
    match status {
        Status::Pass => RenderableStatus::Pass,
        Status::Warn => RenderableStatus::Warn,
        Status::Fail => RenderableStatus::Fail,
    }
}
