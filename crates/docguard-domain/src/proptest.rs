//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Report determinism (value, bytes, digest)
//! - One result per rule, in rule set order
//! - Strict-mode promotion and gating short-circuit

use crate::digest::digest;
use crate::engine::run;
use crate::model::DocumentFacts;
use crate::policy::PromotionTable;
use crate::registry::registry;
use crate::ruleset::RuleSet;
use docguard_types::{Mode, Outcome, Status};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Document numbers built from a mix of valid and invalid field values.
fn arb_document_number() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["PRJ01", "ABC", "x", "PROJECT001"]),
        prop::sample::select(vec!["MAC", "AB", "ORG123"]),
        prop::sample::select(vec!["ZZ", "01", "VOL"]),
        prop::sample::select(vec!["00", "L1", "B"]),
        prop::sample::select(vec!["RP", "CA", "MI", "SP", "DR", "QQ", "rp"]),
        prop::sample::select(vec!["A", "S", "J", "a"]),
        prop::sample::select(vec!["0001", "12", "000123"]),
    )
        .prop_map(|(p, o, v, l, t, r, n)| format!("{p}-{o}-{v}-{l}-{t}-{r}-{n}"))
}

fn arb_filename() -> impl Strategy<Value = String> {
    let stem = prop_oneof![
        3 => arb_document_number(),
        1 => prop::string::string_regex("[A-Za-z0-9 _-]{0,24}").expect("valid regex"),
    ];
    (
        stem,
        prop::sample::select(vec![".pdf", ".md", ".docx", ".txt", ""]),
    )
        .prop_map(|(stem, ext)| format!("{stem}{ext}"))
}

fn arb_metadata() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(
        prop::sample::select(vec!["title", "author", "status", "revision", "Client"])
            .prop_map(str::to_string),
        prop::sample::select(vec![
            "Report", "J. Smith", "S2", "XX", "P01", "C02.1", "rev B", "", "  ",
        ])
        .prop_map(str::to_string),
        0..5,
    )
}

fn arb_sections() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "Introduction",
            "1. Scope",
            "Findings",
            "Conclusion",
            "Report",
            "Attendees",
            "Actions",
            "scope",
            "",
        ])
        .prop_map(str::to_string),
        0..8,
    )
}

fn arb_facts() -> impl Strategy<Value = DocumentFacts> {
    (arb_filename(), arb_metadata(), arb_sections())
        .prop_map(|(filename, metadata, sections)| DocumentFacts::new(filename, metadata, sections))
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Standard), Just(Mode::Strict)]
}

fn arb_categories() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(vec!["naming", "metadata", "structure"], 1..=3)
}

fn ruleset(categories: &[&str], mode: Mode) -> RuleSet {
    RuleSet::build(Some(categories))
        .expect("known categories")
        .with_mode(mode)
}

// ============================================================================
// Property tests: determinism and completeness
// ============================================================================

proptest! {
    /// The same facts and rule set always produce the same report, bytes, and digest.
    #[test]
    fn reports_are_deterministic(
        facts in arb_facts(),
        categories in arb_categories(),
        mode in arb_mode(),
    ) {
        let set = ruleset(&categories, mode);
        let a = run(&facts, &set).expect("non-empty set");
        let b = run(&facts, &set).expect("non-empty set");

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(
            serde_json::to_vec(&a).expect("serialize"),
            serde_json::to_vec(&b).expect("serialize")
        );
        prop_assert_eq!(digest(&a).expect("digest"), digest(&b).expect("digest"));
    }

    /// Every rule contributes exactly one result, in rule set order.
    #[test]
    fn every_rule_has_exactly_one_result(
        facts in arb_facts(),
        categories in arb_categories(),
        mode in arb_mode(),
    ) {
        let set = ruleset(&categories, mode);
        let report = run(&facts, &set).expect("non-empty set");

        let got: Vec<&str> = report.results().iter().map(|r| r.rule_id.as_str()).collect();
        let want: Vec<&str> = set.ids().collect();
        prop_assert_eq!(got, want);

        let counts = report.counts();
        prop_assert_eq!(
            (counts.pass + counts.warn + counts.fail + counts.skipped) as usize,
            set.len()
        );
    }

    /// Overall status is the worst non-skipped outcome.
    #[test]
    fn overall_status_is_worst_outcome(
        facts in arb_facts(),
        mode in arb_mode(),
    ) {
        let report = run(&facts, &ruleset(&["naming", "metadata", "structure"], mode))
            .expect("non-empty set");
        let outcomes: Vec<Outcome> = report.results().iter().map(|r| r.outcome).collect();

        let expected = if outcomes.contains(&Outcome::Fail) {
            Status::Fail
        } else if outcomes.contains(&Outcome::Warn) {
            Status::Warn
        } else {
            Status::Pass
        };
        prop_assert_eq!(report.overall_status(), expected);
    }
}

// ============================================================================
// Property tests: strict mode
// ============================================================================

proptest! {
    /// Strict mode only ever changes a warn into a fail, and only for promotable rules.
    #[test]
    fn strict_promotion_is_consistent(facts in arb_facts()) {
        let all = ["naming", "metadata", "structure"];
        let standard = run(&facts, &ruleset(&all, Mode::Standard)).expect("non-empty set");
        let strict = run(&facts, &ruleset(&all, Mode::Strict)).expect("non-empty set");
        let table = PromotionTable::standard();

        for (s, t) in standard.results().iter().zip(strict.results()) {
            prop_assert_eq!(&s.rule_id, &t.rule_id);
            prop_assert!(!s.promoted);
            if t.outcome == Outcome::Skipped {
                continue;
            }
            match s.outcome {
                Outcome::Warn if table.promotes_in_strict(&s.rule_id) => {
                    prop_assert_eq!(t.outcome, Outcome::Fail);
                    prop_assert!(t.promoted);
                    prop_assert_eq!(&s.detail, &t.detail);
                }
                other => {
                    prop_assert_eq!(t.outcome, other);
                    prop_assert!(!t.promoted);
                }
            }
        }
        prop_assert!(strict.overall_status() >= standard.overall_status());
    }

    /// Results are skipped exactly after the first failing gating rule in strict mode.
    #[test]
    fn short_circuit_follows_first_gating_failure(
        facts in arb_facts(),
        mode in arb_mode(),
    ) {
        let report = run(&facts, &ruleset(&["naming", "metadata", "structure"], mode))
            .expect("non-empty set");

        let gate = report.results().iter().position(|r| {
            r.outcome == Outcome::Fail
                && registry().get(&r.rule_id).is_some_and(|rule| rule.gating)
        });

        for (idx, result) in report.results().iter().enumerate() {
            let should_skip = mode == Mode::Strict && gate.is_some_and(|g| idx > g);
            prop_assert_eq!(
                result.outcome == Outcome::Skipped,
                should_skip,
                "rule {} at index {} (gate {:?})",
                result.rule_id,
                idx,
                gate
            );
        }
    }
}

#[test]
fn empty_rule_set_is_rejected_for_any_mode() {
    for mode in [Mode::Standard, Mode::Strict] {
        let set = RuleSet::build(Some(&[])).expect("empty filter").with_mode(mode);
        assert!(run(&DocumentFacts::default(), &set).is_err());
    }
}
