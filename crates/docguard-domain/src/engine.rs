use crate::error::ConfigurationError;
use crate::model::DocumentFacts;
use crate::policy::PromotionTable;
use crate::rule::Rule;
use crate::ruleset::RuleSet;
use docguard_types::{Mode, Outcome, RuleResult, ValidationReport};

/// Run `ruleset` against `facts` with the built-in promotion table.
pub fn run(facts: &DocumentFacts, ruleset: &RuleSet) -> Result<ValidationReport, ConfigurationError> {
    run_with_policy(facts, ruleset, PromotionTable::standard())
}

/// Run `ruleset` against `facts`, promoting strict-mode warnings per `promotions`.
///
/// The report has exactly one result per rule, in rule set order. After a gating rule fails in
/// strict mode every later rule is recorded as `skipped`.
pub fn run_with_policy(
    facts: &DocumentFacts,
    ruleset: &RuleSet,
    promotions: &PromotionTable,
) -> Result<ValidationReport, ConfigurationError> {
    if ruleset.is_empty() {
        return Err(ConfigurationError::EmptyRuleSet);
    }

    let strict = ruleset.mode == Mode::Strict;
    let mut results: Vec<RuleResult> = Vec::with_capacity(ruleset.len());
    let mut gate: Option<&'static str> = None;

    for rule in &ruleset.rules {
        if let Some(gate_id) = gate {
            results.push(skipped(rule, gate_id));
            continue;
        }

        let verdict = rule.evaluate(facts);
        let mut outcome = verdict.outcome();
        tracing::trace!(rule = rule.id, ?outcome, "evaluated rule");

        let promoted =
            strict && outcome == Outcome::Warn && promotions.promotes_in_strict(rule.id);
        if promoted {
            tracing::debug!(rule = rule.id, "promoted warn to fail (strict mode)");
            outcome = Outcome::Fail;
        }

        if strict && outcome == Outcome::Fail && rule.gating {
            tracing::debug!(rule = rule.id, "gating rule failed; skipping remaining rules");
            gate = Some(rule.id);
        }

        results.push(RuleResult {
            rule_id: rule.id.to_string(),
            category: rule.category,
            severity: rule.severity,
            outcome,
            detail: verdict.into_detail(),
            promoted,
        });
    }

    Ok(ValidationReport::new(facts.filename(), ruleset.mode, results))
}

fn skipped(rule: &Rule, gate_id: &str) -> RuleResult {
    RuleResult {
        rule_id: rule.id.to_string(),
        category: rule.category,
        severity: rule.severity,
        outcome: Outcome::Skipped,
        detail: Some(format!("skipped: gating rule {gate_id} failed")),
        promoted: false,
    }
}
