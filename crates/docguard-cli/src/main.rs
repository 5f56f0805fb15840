//! CLI entry point for docguard.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup, and exit codes.
//! All business logic lives in the `docguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use docguard_app::{
    format_explanation, format_not_found, format_rules, list_rules, parse_format,
    parse_report_json, render_report, run_check, run_explain, serialize_report, status_exit_code,
    verify_digests, CheckInput, ExplainOutput,
};
use docguard_settings::Overrides;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_CONFIG: &str = "docguard.toml";

#[derive(Parser, Debug)]
#[command(
    name = "docguard",
    version,
    about = "ISO 19650 document naming, metadata, and structure compliance checks"
)]
struct Cli {
    /// Path to docguard config TOML (default: ./docguard.toml when present).
    #[arg(long, global = true)]
    config: Option<Utf8PathBuf>,

    /// Override profile (standard|strict).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Shorthand for `--profile strict`.
    #[arg(long, global = true)]
    strict: bool,

    /// Only evaluate rules in this category (naming|metadata|structure). Repeatable.
    #[arg(long = "category", global = true)]
    categories: Vec<String>,

    /// Log at debug level (overridden by DOCGUARD_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a document, or every document under a directory.
    Check {
        /// Document file or directory.
        path: Utf8PathBuf,

        /// Output format: console, markdown, html, or json.
        #[arg(long, default_value = "console")]
        format: String,

        /// Write the rendered output here instead of stdout.
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Also write the JSON report envelope here.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Explain a rule with remediation guidance.
    Explain {
        /// The rule id, e.g. "naming.field_count".
        rule_id: String,
    },

    /// List every rule with its category, severity, and strict-mode behavior.
    Rules,

    /// Render an existing JSON report.
    Render {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Output format: console, markdown, html, or json.
        #[arg(long, default_value = "console")]
        format: String,

        /// Where to write the output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match dispatch(&cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("docguard error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

/// Logs go to stderr so stdout only carries the report.
fn init_tracing(verbose: bool) {
    let default = if verbose { "docguard=debug" } else { "docguard=warn" };
    let filter =
        EnvFilter::try_from_env("DOCGUARD_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn dispatch(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.cmd {
        Commands::Check {
            path,
            format,
            output,
            report_out,
        } => cmd_check(cli, path, format, output.as_deref(), report_out.as_deref()),
        Commands::Explain { rule_id } => Ok(cmd_explain(rule_id)),
        Commands::Rules => {
            print!("{}", format_rules(&list_rules()));
            Ok(0)
        }
        Commands::Render {
            report,
            format,
            output,
        } => cmd_render(report, format, output.as_deref()),
    }
}

fn cmd_check(
    cli: &Cli,
    path: &Utf8Path,
    format: &str,
    output: Option<&Utf8Path>,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let format = parse_format(format)?;
    if !path.exists() {
        anyhow::bail!("path does not exist: {path}");
    }

    let cfg_text = read_config(cli.config.as_deref())?;
    let overrides = Overrides {
        profile: cli.profile.clone(),
        strict: cli.strict,
        categories: (!cli.categories.is_empty()).then(|| cli.categories.clone()),
    };

    let output_report = run_check(CheckInput {
        path,
        config_text: &cfg_text,
        overrides,
    })?;

    if let Some(report_out) = report_out {
        let data = serialize_report(&output_report.report).context("serialize report")?;
        write_file(report_out, &data).context("write report json")?;
    }

    let rendered = render_report(&output_report.report, format)?;
    emit(output, &rendered)?;

    Ok(status_exit_code(output_report.report.status()))
}

/// Explicit `--config` must exist; the default `docguard.toml` is optional.
fn read_config(path: Option<&Utf8Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
        }
        None => {
            let default = Utf8Path::new(DEFAULT_CONFIG);
            if default.is_file() {
                tracing::debug!(config = %default, "using default config file");
                std::fs::read_to_string(default)
                    .with_context(|| format!("read config: {default}"))
            } else {
                Ok(String::new())
            }
        }
    }
}

fn cmd_explain(rule_id: &str) -> i32 {
    match run_explain(rule_id) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_rule_ids));
            1
        }
    }
}

fn cmd_render(
    report_path: &Utf8Path,
    format: &str,
    output: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let format = parse_format(format)?;
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {report_path}"))?;
    let report = parse_report_json(&report_text)?;
    verify_digests(&report)?;

    let rendered = render_report(&report, format)?;
    emit(output, &rendered)?;
    Ok(0)
}

fn emit(output: Option<&Utf8Path>, data: &[u8]) -> anyhow::Result<()> {
    match output {
        Some(path) => write_file(path, data).context("write output"),
        None => {
            use std::io::Write;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data).context("write stdout")?;
            stdout.flush().context("flush stdout")
        }
    }
}

fn write_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, data).with_context(|| format!("write file: {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docguard",
            "check",
            "docs",
            "--strict",
            "--category",
            "naming",
            "--category",
            "metadata",
            "--format",
            "json",
        ])
        .expect("parse");
        assert!(cli.strict);
        assert_eq!(cli.categories, ["naming", "metadata"]);
        assert!(matches!(cli.cmd, Commands::Check { ref format, .. } if format == "json"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = read_config(Some(Utf8Path::new("definitely/not/here.toml"))).expect_err("missing");
        assert!(format!("{err:#}").contains("read config"));
    }

    #[test]
    fn unknown_format_is_rejected_before_running() {
        let cli = Cli::try_parse_from(["docguard", "check", ".", "--format", "pdf"]).expect("parse");
        let err = dispatch(&cli).expect_err("bad format");
        assert!(err.to_string().contains("unknown format: pdf"));
    }
}
