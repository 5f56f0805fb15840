//! Developer tasks (schema generation, fixture conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("determine current directory")?,
    };

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent directory")
    } else {
        Ok(manifest_dir)
    }
}

fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(docguard_types::ReportEnvelope)
}

fn generate_batch_schema() -> schemars::Schema {
    schema_for!(docguard_types::BatchEnvelope)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(docguard_settings::DocguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "docguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "docguard.batch.v1.json",
            generate: generate_batch_schema,
        },
        SchemaSpec {
            filename: "docguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Compile a generated schema for validating documents.
fn compile(schema: &schemars::Schema) -> anyhow::Result<jsonschema::Validator> {
    jsonschema::draft202012::new(schema.as_value())
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run the docguard binary on tests/fixtures and validate its reports");
    eprintln!("  explain-coverage  Validate every registered rule has an explanation");
}

/// A document path in a report must be relative with forward slashes.
fn is_clean_path(path: &str) -> bool {
    !(path.starts_with('/')
        || path.starts_with('\\')
        || path.split('/').any(|seg| seg == "..")
        || path.contains('\\')
        || (path.len() >= 2 && path.as_bytes()[1] == b':'))
}

/// Problems with one report value: schema violations, unclean paths, and digests that do not
/// match the embedded report.
fn report_problems(
    value: &Value,
    report_schema: &jsonschema::Validator,
    batch_schema: &jsonschema::Validator,
) -> Vec<String> {
    let mut problems = Vec::new();

    let (schema, envelopes) = match value.get("schema").and_then(Value::as_str) {
        Some(docguard_types::SCHEMA_REPORT_V1) => (report_schema, vec![value]),
        Some(docguard_types::SCHEMA_BATCH_V1) => (
            batch_schema,
            value
                .get("documents")
                .and_then(Value::as_array)
                .map(|docs| docs.iter().collect())
                .unwrap_or_default(),
        ),
        other => {
            problems.push(format!("unknown report schema: {other:?}"));
            return problems;
        }
    };

    for err in schema.iter_errors(value) {
        problems.push(format!("schema validation: {err}"));
    }

    for (i, envelope) in envelopes.iter().enumerate() {
        if let Some(path) = envelope.pointer("/document/path").and_then(Value::as_str)
            && !is_clean_path(path)
        {
            problems.push(format!(
                "document[{i}].path '{path}' is not clean (no absolute, no ../, forward slashes only)"
            ));
        }

        let stored = envelope.get("digest").and_then(Value::as_str);
        let computed = envelope
            .get("report")
            .cloned()
            .and_then(|r| serde_json::from_value::<docguard_types::ValidationReport>(r).ok())
            .and_then(|r| docguard_domain::digest::digest(&r).ok());
        if stored.is_none() || stored != computed.as_deref() {
            problems.push(format!("document[{i}]: digest does not match its report"));
        }
    }

    problems
}

fn docguard_bin() -> anyhow::Result<PathBuf> {
    let bin = project_root()?.join("target").join("debug").join("docguard");
    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");

    if !bin.exists() {
        bail!(
            "docguard binary not found at {}.\nRun `cargo build -p docguard-cli` first.",
            bin.display()
        );
    }
    Ok(bin)
}

/// Run the binary on one fixture; returns the exit code and the `--report-out` JSON.
fn run_fixture(bin: &Path, fixture_dir: &Path, expected: &Value) -> anyhow::Result<(i32, Value)> {
    let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
    let report_out = temp_dir.path().join("report.json");

    let target = expected
        .get("target")
        .and_then(Value::as_str)
        .context("expected.json has no target")?;
    let args: Vec<&str> = expected
        .get("args")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let output = std::process::Command::new(bin)
        .current_dir(fixture_dir)
        .arg("check")
        .arg(target)
        .args(&args)
        .arg("--report-out")
        .arg(&report_out)
        .output()
        .context("Failed to run docguard")?;

    let code = output.status.code().unwrap_or(-1);
    if code == 1 {
        bail!(
            "docguard reported a tool error: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let text = fs::read_to_string(&report_out).context("no report output generated")?;
    let value = serde_json::from_str(&text).context("Failed to parse report")?;
    Ok((code, value))
}

/// Run the docguard binary on every fixture in tests/fixtures and check its reports.
///
/// For each fixture with an `expected.json`:
/// 1. The exit code matches `exit_code`
/// 2. The report validates against the generated report or batch schema
/// 3. Document paths are clean and digests match their reports
/// 4. A second run produces the same report once timestamps and versions are normalized
fn conform() -> anyhow::Result<()> {
    let report_schema = compile(&generate_report_schema())?;
    let batch_schema = compile(&generate_batch_schema())?;
    let bin = docguard_bin()?;

    let fixtures_dir = project_root()?.join("tests").join("fixtures");
    let mut entries: Vec<PathBuf> = fs::read_dir(&fixtures_dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.join("expected.json").is_file())
        .collect();
    entries.sort();

    if entries.is_empty() {
        bail!("No fixtures with expected.json found in {}", fixtures_dir.display());
    }

    let mut errors = Vec::new();
    for fixture_dir in &entries {
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let expected: Value = serde_json::from_str(
            &fs::read_to_string(fixture_dir.join("expected.json"))
                .with_context(|| format!("Failed to read expected.json for '{name}'"))?,
        )
        .with_context(|| format!("Failed to parse expected.json for '{name}'"))?;

        let (code, first) = match run_fixture(&bin, fixture_dir, &expected) {
            Ok(run) => run,
            Err(err) => {
                errors.push(format!("fixture '{name}': {err:#}"));
                continue;
            }
        };

        if expected.get("exit_code").and_then(Value::as_i64) != Some(i64::from(code)) {
            errors.push(format!("fixture '{name}': unexpected exit code {code}"));
        }
        for problem in report_problems(&first, &report_schema, &batch_schema) {
            errors.push(format!("fixture '{name}': {problem}"));
        }

        match run_fixture(&bin, fixture_dir, &expected) {
            Ok((_, second)) => {
                let first = docguard_test_util::normalize_nondeterministic(first);
                let second = docguard_test_util::normalize_nondeterministic(second);
                if first != second {
                    errors.push(format!("fixture '{name}': report differs between runs"));
                }
            }
            Err(err) => errors.push(format!("fixture '{name}': second run: {err:#}")),
        }

        println!("  ✓ {} checked", name);
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {} fixtures pass conformance checks!", entries.len());
    Ok(())
}

/// Problems with rule explanations; empty when every registered rule is covered.
fn explain_problems() -> Vec<String> {
    let mut errors = Vec::new();

    for rule in docguard_domain::registry().all() {
        match docguard_types::explain::lookup_explanation(rule.id) {
            Some(exp) => {
                for (field, text) in [
                    ("title", exp.title),
                    ("description", exp.description),
                    ("remediation", exp.remediation),
                    ("example before", exp.examples.before),
                    ("example after", exp.examples.after),
                ] {
                    if text.trim().is_empty() {
                        errors.push(format!("Rule '{}' has empty {}", rule.id, field));
                    }
                }
            }
            None => errors.push(format!("Rule '{}' has no explanation", rule.id)),
        }
    }

    for id in docguard_types::explain::all_rule_ids() {
        if docguard_domain::registry().get(id).is_none() {
            errors.push(format!("Explanation '{}' has no registered rule", id));
        }
    }

    errors
}

fn explain_coverage() -> anyhow::Result<()> {
    let errors = explain_problems();
    if errors.is_empty() {
        println!(
            "✓ {} rules have explanations",
            docguard_domain::registry().all().len()
        );
        println!("\n✓ All explain coverage checks passed!");
        return Ok(());
    }

    for error in &errors {
        eprintln!("  - {}", error);
    }
    bail!(
        "Explain coverage validation failed with {} errors",
        errors.len()
    )
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docguard_domain::{DocumentFacts, RuleSet};
    use docguard_types::{
        DocumentMeta, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, ToolMeta,
    };
    use time::OffsetDateTime;

    fn envelope(filename: &str) -> Value {
        let facts = DocumentFacts::new(filename, [("title", "Survey")], vec!["Scope".to_string()]);
        let report =
            docguard_domain::run(&facts, &RuleSet::build(None).expect("rule set")).expect("run");
        let digest = docguard_domain::digest::digest(&report).expect("digest");
        serde_json::to_value(ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "docguard".to_string(),
                version: "0.1.0".to_string(),
            },
            run: RunMeta {
                started_at: OffsetDateTime::UNIX_EPOCH,
                ended_at: Some(OffsetDateTime::UNIX_EPOCH),
                duration_ms: Some(0),
            },
            document: DocumentMeta {
                path: format!("docs/{filename}"),
                size_bytes: Some(42),
            },
            report,
            digest,
        })
        .expect("serialize envelope")
    }

    fn validators() -> (jsonschema::Validator, jsonschema::Validator) {
        (
            compile(&generate_report_schema()).expect("report schema"),
            compile(&generate_batch_schema()).expect("batch schema"),
        )
    }

    #[test]
    fn every_schema_serializes_with_trailing_newline() {
        for spec in schema_specs() {
            let json = serialize_schema(&(spec.generate)()).expect("serialize");
            assert!(json.ends_with("}\n"), "{}", spec.filename);
        }
    }

    #[test]
    fn generated_report_passes_conformance() {
        let (report, batch) = validators();
        let value = envelope("site survey.pdf");
        assert_eq!(report_problems(&value, &report, &batch), Vec::<String>::new());
    }

    #[test]
    fn batch_report_passes_conformance() {
        let (report, batch) = validators();
        let value = serde_json::json!({
            "schema": docguard_types::SCHEMA_BATCH_V1,
            "tool": {"name": "docguard", "version": "0.1.0"},
            "run": {"started_at": "1970-01-01T00:00:00Z"},
            "status": "fail",
            "documents": [envelope("a.md"), envelope("b.md")],
        });
        assert_eq!(report_problems(&value, &report, &batch), Vec::<String>::new());
    }

    #[test]
    fn tampered_digest_and_absolute_path_are_reported() {
        let (report, batch) = validators();
        let mut value = envelope("notes.md");
        value["digest"] = Value::String("0".repeat(64));
        value["document"]["path"] = Value::String("/home/user/notes.md".to_string());

        let problems = report_problems(&value, &report, &batch);
        assert_eq!(problems.len(), 2, "{problems:?}");
        assert!(problems.iter().any(|p| p.contains("not clean")));
        assert!(problems.iter().any(|p| p.contains("digest")));
    }

    #[test]
    fn schema_violations_are_reported() {
        let (report, batch) = validators();
        let mut value = envelope("notes.md");
        value["report"]["mode"] = Value::String("lenient".to_string());
        assert!(
            report_problems(&value, &report, &batch)
                .iter()
                .any(|p| p.starts_with("schema validation"))
        );
    }

    #[test]
    fn config_schema_accepts_a_sample_config() {
        let schema = compile(&generate_config_schema()).expect("config schema");
        let sample = serde_json::json!({
            "schema": "docguard.config.v1",
            "profile": "strict",
            "categories": ["naming", "metadata"],
            "exclude": ["drafts/**"],
            "checks": {"structure.section_order": {"enabled": false}},
        });
        assert!(schema.is_valid(&sample));
    }

    #[test]
    fn clean_paths() {
        assert!(is_clean_path("docs/PRJ01-MAC-ZZ-00-RP-A-0001.md"));
        assert!(is_clean_path("a..b/report.md"));
        assert!(!is_clean_path("/abs/report.md"));
        assert!(!is_clean_path("../report.md"));
        assert!(!is_clean_path("docs\\report.md"));
        assert!(!is_clean_path("C:/report.md"));
    }

    #[test]
    fn every_rule_is_explained() {
        assert_eq!(explain_problems(), Vec::<String>::new());
    }
}
