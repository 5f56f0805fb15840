use crate::model::DocumentFacts;
use docguard_types::{Category, Outcome, Severity};

/// Outcome of evaluating one rule against one document's facts.
///
/// Non-pass verdicts always carry a human-readable detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Warn(String),
    Fail(String),
}

impl Verdict {
    pub fn outcome(&self) -> Outcome {
        match self {
            Verdict::Pass => Outcome::Pass,
            Verdict::Warn(_) => Outcome::Warn,
            Verdict::Fail(_) => Outcome::Fail,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Verdict::Pass => None,
            Verdict::Warn(d) | Verdict::Fail(d) => Some(d.as_str()),
        }
    }

    pub(crate) fn into_detail(self) -> Option<String> {
        match self {
            Verdict::Pass => None,
            Verdict::Warn(d) | Verdict::Fail(d) => Some(d),
        }
    }
}

/// A rule predicate: total, pure, and side-effect free.
pub type Predicate = fn(&DocumentFacts) -> Verdict;

/// A single named check.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub id: &'static str,
    pub category: Category,
    pub severity: Severity,
    /// Later rules assume this one passed; a strict-mode failure skips them.
    pub gating: bool,
    predicate: Predicate,
}

impl Rule {
    pub const fn new(
        id: &'static str,
        category: Category,
        severity: Severity,
        predicate: Predicate,
    ) -> Self {
        Self {
            id,
            category,
            severity,
            gating: false,
            predicate,
        }
    }

    pub const fn gating(mut self) -> Self {
        self.gating = true;
        self
    }

    pub fn evaluate(&self, facts: &DocumentFacts) -> Verdict {
        (self.predicate)(facts)
    }
}
