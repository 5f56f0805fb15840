//! The `explain` and `rules` use cases: rule documentation and the rule catalog.

use docguard_domain::{registry, PromotionTable};
use docguard_types::explain::{self, Explanation};
use docguard_types::{Category, Severity};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes the available rule ids.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a rule id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier.trim()) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: explain::all_rule_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (violation):\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (fixed):\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, rule_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id: {}\n\n", identifier));
    out.push_str("Available rule ids:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

/// One row of the rule catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSummary {
    pub id: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub gating: bool,
    pub promoted_in_strict: bool,
    pub title: &'static str,
}

/// Every registered rule, in evaluation order.
pub fn list_rules() -> Vec<RuleSummary> {
    let promotions = PromotionTable::standard();
    registry()
        .all()
        .iter()
        .map(|rule| RuleSummary {
            id: rule.id,
            category: rule.category,
            severity: rule.severity,
            gating: rule.gating,
            promoted_in_strict: promotions.promotes_in_strict(rule.id),
            title: explain::lookup_explanation(rule.id)
                .map(|e| e.title)
                .unwrap_or_default(),
        })
        .collect()
}

/// Aligned table of the rule catalog.
pub fn format_rules(rules: &[RuleSummary]) -> String {
    let id_width = rules.iter().map(|r| r.id.len()).max().unwrap_or(0).max("RULE".len());
    let mut out = format!(
        "{:<id_width$}  {:<9}  {:<8}  {:<6}  {:<6}  TITLE\n",
        "RULE", "CATEGORY", "SEVERITY", "GATING", "STRICT"
    );
    for r in rules {
        out.push_str(&format!(
            "{:<id_width$}  {:<9}  {:<8}  {:<6}  {:<6}  {}\n",
            r.id,
            r.category.as_str(),
            r.severity.as_str(),
            if r.gating { "yes" } else { "-" },
            if r.promoted_in_strict { "fail" } else { "-" },
            r.title
        ));
    }
    out
}
