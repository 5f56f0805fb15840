//! Fuzz target for the validation engine.
//!
//! Goal: the engine should **never panic** on arbitrary document facts, and every report
//! keeps its structural guarantees:
//! - one result per rule, in rule set order
//! - overall status equals the worst outcome
//! - after the first failing gating rule in strict mode, every result is skipped
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_engine
//! ```

#![no_main]

use arbitrary::Arbitrary;
use docguard_domain::{DocumentFacts, RuleSet, registry};
use docguard_types::{Mode, Outcome, Status};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EngineInput {
    filename: String,
    metadata: Vec<(String, String)>,
    sections: Vec<String>,
    strict: bool,
}

fuzz_target!(|input: EngineInput| {
    if input.metadata.len() > 32 || input.sections.len() > 64 {
        return;
    }

    let facts = DocumentFacts::new(input.filename, input.metadata, input.sections);
    let mode = if input.strict { Mode::Strict } else { Mode::Standard };
    let Ok(ruleset) = RuleSet::build(None) else {
        return;
    };
    let ruleset = ruleset.with_mode(mode);

    let Ok(report) = docguard_domain::run(&facts, &ruleset) else {
        return;
    };

    let ids: Vec<&str> = report.results().iter().map(|r| r.rule_id.as_str()).collect();
    let expected: Vec<&str> = ruleset.ids().collect();
    assert_eq!(ids, expected);

    let worst = report
        .results()
        .iter()
        .map(|r| match r.outcome {
            Outcome::Fail => Status::Fail,
            Outcome::Warn => Status::Warn,
            Outcome::Pass | Outcome::Skipped => Status::Pass,
        })
        .max()
        .unwrap_or(Status::Pass);
    assert_eq!(report.overall_status(), worst);

    if mode == Mode::Strict {
        let gate = report.results().iter().position(|r| {
            r.outcome == Outcome::Fail
                && registry().get(&r.rule_id).is_some_and(|rule| rule.gating)
        });
        if let Some(gate) = gate {
            assert!(report.results()[gate + 1..]
                .iter()
                .all(|r| r.outcome == Outcome::Skipped));
        }
    }
});
