use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rule category. Declaration order is evaluation order: naming, then metadata, then structure.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Naming,
    Metadata,
    Structure,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Naming, Category::Metadata, Category::Structure];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Naming => "naming",
            Category::Metadata => "metadata",
            Category::Structure => "structure",
        }
    }

    /// Parse a category name (`naming`, `metadata`, `structure`). Case-insensitive.
    pub fn parse(name: &str) -> Option<Category> {
        let name = name.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

/// Declared severity of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Evaluation mode of a rule set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Standard,
    Strict,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Standard => "standard",
            Mode::Strict => "strict",
        }
    }
}

/// Recorded outcome of one rule in a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Warn,
    Fail,
    Skipped,
}

/// Overall status of a report. Ordered from best to worst.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pass,
    Warn,
    Fail,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Fail => "fail",
        }
    }

    /// Worst status across non-skipped outcomes (fail > warn > pass).
    pub fn worst_of<'a, I>(outcomes: I) -> Status
    where
        I: IntoIterator<Item = &'a Outcome>,
    {
        outcomes
            .into_iter()
            .filter_map(|o| match o {
                Outcome::Pass => Some(Status::Pass),
                Outcome::Warn => Some(Status::Warn),
                Outcome::Fail => Some(Status::Fail),
                Outcome::Skipped => None,
            })
            .max()
            .unwrap_or(Status::Pass)
    }
}

/// One entry per rule in the evaluated rule set, in rule set order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RuleResult {
    pub rule_id: String,
    pub category: Category,
    pub severity: Severity,
    pub outcome: Outcome,

    /// Explanation; present whenever `outcome` is not `pass`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Set when strict mode upgraded a `warn` verdict to `fail`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub promoted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeCounts {
    pub pass: u32,
    pub warn: u32,
    pub fail: u32,
    pub skipped: u32,
}

impl OutcomeCounts {
    pub fn from_results(results: &[RuleResult]) -> Self {
        let mut counts = OutcomeCounts::default();
        for r in results {
            match r.outcome {
                Outcome::Pass => counts.pass += 1,
                Outcome::Warn => counts.warn += 1,
                Outcome::Fail => counts.fail += 1,
                Outcome::Skipped => counts.skipped += 1,
            }
        }
        counts
    }
}

/// The output of one validation run.
///
/// Contains no timestamps or host data: the same facts and rule set always produce an equal
/// report, and therefore byte-identical JSON.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    document: String,
    mode: Mode,
    overall_status: Status,
    counts: OutcomeCounts,
    results: Vec<RuleResult>,
}

impl ValidationReport {
    /// Build a report; `overall_status` and `counts` are derived from `results`.
    pub fn new(document: impl Into<String>, mode: Mode, results: Vec<RuleResult>) -> Self {
        let overall_status = Status::worst_of(results.iter().map(|r| &r.outcome));
        let counts = OutcomeCounts::from_results(&results);
        Self {
            document: document.into(),
            mode,
            overall_status,
            counts,
            results,
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn overall_status(&self) -> Status {
        self.overall_status
    }

    pub fn counts(&self) -> &OutcomeCounts {
        &self.counts
    }

    pub fn results(&self) -> &[RuleResult] {
        &self.results
    }

    pub fn result(&self, rule_id: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.rule_id == rule_id)
    }
}
