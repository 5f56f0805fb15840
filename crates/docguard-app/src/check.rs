//! The `check` use case: extract facts, run the rule set, produce report envelopes.

use anyhow::Context;
use camino::Utf8Path;
use docguard_domain::{ConfigurationError, RuleSet};
use docguard_extract::{AutoExtractor, Extractor};
use docguard_settings::{EffectiveConfig, Overrides, ResolvedConfig};
use docguard_types::{
    BatchEnvelope, DocumentMeta, ReportEnvelope, RunMeta, SCHEMA_BATCH_V1, SCHEMA_REPORT_V1,
    Status, ToolMeta,
};
use rayon::prelude::*;
use time::OffsetDateTime;

use crate::report::ReportVariant;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Document file, or a directory to check every discovered document in.
    pub path: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ReportVariant,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, build the rule set, validate one document or a
/// directory of documents.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        docguard_settings::DocguardConfigV1::default()
    } else {
        docguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved =
        docguard_settings::resolve_config(cfg, input.overrides).context("resolve config")?;
    let ruleset = resolved.effective.rule_set().context("build rule set")?;
    if ruleset.is_empty() {
        return Err(ConfigurationError::EmptyRuleSet).context("build rule set");
    }

    let report = if input.path.is_dir() {
        ReportVariant::Batch(check_batch(
            &AutoExtractor,
            input.path,
            &resolved.effective,
            &ruleset,
        )?)
    } else {
        ReportVariant::Single(check_document(&AutoExtractor, input.path, &ruleset)?)
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Validate a single document.
pub fn check_document<E>(
    extractor: &E,
    path: &Utf8Path,
    ruleset: &RuleSet,
) -> anyhow::Result<ReportEnvelope>
where
    E: Extractor + ?Sized,
{
    let started_at = OffsetDateTime::now_utc();

    let facts = extractor
        .extract(path)
        .with_context(|| format!("extract facts: {path}"))?;
    tracing::debug!(
        document = %path,
        metadata = facts.metadata().len(),
        sections = facts.sections().len(),
        "extracted facts"
    );

    let report = docguard_domain::run(&facts, ruleset)
        .with_context(|| format!("validate {path}"))?;
    let digest = docguard_domain::digest::digest(&report).context("digest report")?;
    let size_bytes = std::fs::metadata(path).ok().map(|m| m.len());

    let ended_at = OffsetDateTime::now_utc();
    tracing::info!(document = %path, status = report.overall_status().as_str(), "validated");

    Ok(ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        run: run_meta(started_at, ended_at),
        document: DocumentMeta {
            path: path.as_str().replace('\\', "/"),
            size_bytes,
        },
        report,
        digest,
    })
}

/// Validate every document discovered under `root`, in parallel.
///
/// Documents are ordered by path regardless of completion order. Any extraction or
/// validation error aborts the batch.
pub fn check_batch<E>(
    extractor: &E,
    root: &Utf8Path,
    effective: &EffectiveConfig,
    ruleset: &RuleSet,
) -> anyhow::Result<BatchEnvelope>
where
    E: Extractor + Sync + ?Sized,
{
    let started_at = OffsetDateTime::now_utc();

    let paths = docguard_extract::discover_documents(root, &effective.include, &effective.exclude)
        .with_context(|| format!("discover documents under {root}"))?;
    if paths.is_empty() {
        tracing::warn!(root = %root, "no documents matched the include globs");
    }

    let documents: Vec<ReportEnvelope> = paths
        .par_iter()
        .map(|path| check_document(extractor, path, ruleset))
        .collect::<anyhow::Result<_>>()?;

    let status = documents
        .iter()
        .map(|d| d.report.overall_status())
        .max()
        .unwrap_or(Status::Pass);

    let ended_at = OffsetDateTime::now_utc();
    Ok(BatchEnvelope {
        schema: SCHEMA_BATCH_V1.to_string(),
        tool: tool_meta(),
        run: run_meta(started_at, ended_at),
        status,
        documents,
    })
}

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "docguard".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

fn run_meta(started_at: OffsetDateTime, ended_at: OffsetDateTime) -> RunMeta {
    let duration_ms = (ended_at - started_at).whole_milliseconds().max(0) as u64;
    RunMeta {
        started_at,
        ended_at: Some(ended_at),
        duration_ms: Some(duration_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use docguard_domain::DocumentFacts;
    use docguard_extract::ExtractionError;
    use docguard_types::{ids, Mode, Outcome};

    const COMPLIANT: &str = "---\ntitle: Ground Investigation Report\nauthor: J. Smith\nstatus: S2\nrevision: P01\n---\n# Ground Investigation Report\n## 1. Introduction\n## 2. Scope\n## 3. Findings\n## 4. Conclusion\n";

    fn utf8_root(tmp: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn input<'a>(path: &'a Utf8Path, config_text: &'a str) -> CheckInput<'a> {
        CheckInput {
            path,
            config_text,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn compliant_document_passes() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let doc = utf8_root(&tmp).join("PRJ01-MAC-ZZ-00-RP-A-0001.md");
        std::fs::write(&doc, COMPLIANT).expect("write document");

        let output = run_check(input(&doc, "")).expect("run_check");
        assert_eq!(output.resolved_config.effective.profile, "standard");

        let ReportVariant::Single(envelope) = output.report else {
            panic!("expected single report");
        };
        assert_eq!(envelope.schema, SCHEMA_REPORT_V1);
        assert_eq!(envelope.report.overall_status(), Status::Pass);
        assert_eq!(envelope.document.size_bytes, Some(COMPLIANT.len() as u64));
        assert_eq!(
            envelope.digest,
            docguard_domain::digest::digest(&envelope.report).expect("digest")
        );
    }

    #[test]
    fn strict_profile_from_config_short_circuits_bad_names() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let doc = utf8_root(&tmp).join("site survey.md");
        std::fs::write(&doc, COMPLIANT).expect("write document");

        let output = run_check(input(&doc, "profile = \"strict\"\n")).expect("run_check");
        let envelope = match output.report {
            ReportVariant::Single(e) => e,
            ReportVariant::Batch(_) => panic!("expected single report"),
        };
        assert_eq!(envelope.report.mode(), Mode::Strict);
        assert_eq!(envelope.report.overall_status(), Status::Fail);
        assert_eq!(
            envelope
                .report
                .result(ids::RULE_STRUCTURE_SECTION_ORDER)
                .map(|r| r.outcome),
            Some(Outcome::Skipped)
        );
    }

    #[test]
    fn empty_rule_set_is_an_error() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let doc = utf8_root(&tmp).join("a.md");
        std::fs::write(&doc, "# Scope\n").expect("write document");

        let err = run_check(input(&doc, "categories = []\n")).expect_err("empty rule set");
        assert_eq!(
            err.downcast_ref::<ConfigurationError>(),
            Some(&ConfigurationError::EmptyRuleSet)
        );
    }

    #[test]
    fn unsupported_document_is_an_error() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let doc = utf8_root(&tmp).join("PRJ01-MAC-ZZ-00-DR-A-0001.pdf");
        std::fs::write(&doc, b"%PDF").expect("write document");

        let err = run_check(input(&doc, "")).expect_err("unsupported");
        assert!(matches!(
            err.downcast_ref::<ExtractionError>(),
            Some(ExtractionError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn batch_orders_documents_and_takes_worst_status() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = utf8_root(&tmp);
        std::fs::write(root.join("PRJ01-MAC-ZZ-00-RP-A-0001.md"), COMPLIANT).expect("write");
        std::fs::write(root.join("notes.md"), "# Scope\n").expect("write");
        std::fs::create_dir_all(root.join("drafts")).expect("mkdir");
        std::fs::write(root.join("drafts/x.md"), "").expect("write");

        let output = run_check(input(&root, "exclude = [\"drafts/**\"]\n")).expect("run_check");
        let ReportVariant::Batch(batch) = output.report else {
            panic!("expected batch report");
        };

        assert_eq!(batch.schema, SCHEMA_BATCH_V1);
        let names: Vec<&str> = batch.documents.iter().map(|d| d.report.document()).collect();
        assert_eq!(names, ["PRJ01-MAC-ZZ-00-RP-A-0001.md", "notes.md"]);
        assert_eq!(batch.status, Status::Fail);
    }

    struct FixedFacts(DocumentFacts);

    impl Extractor for FixedFacts {
        fn extract(&self, _path: &Utf8Path) -> Result<DocumentFacts, ExtractionError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn check_document_accepts_any_extractor() {
        let facts = DocumentFacts::new(
            "PRJ01-MAC-ZZ-00-DR-A-0001.pdf",
            [("title", "Ground floor plan")],
            Vec::new(),
        );
        let ruleset = RuleSet::build(Some(&["naming"])).expect("rule set");
        let envelope = check_document(
            &FixedFacts(facts),
            Utf8Path::new("does/not/exist.pdf"),
            &ruleset,
        )
        .expect("check");

        assert_eq!(envelope.report.document(), "PRJ01-MAC-ZZ-00-DR-A-0001.pdf");
        assert_eq!(envelope.report.overall_status(), Status::Pass);
        assert_eq!(envelope.document.size_bytes, None);
        assert_eq!(envelope.document.path, "does/not/exist.pdf");
    }
}
