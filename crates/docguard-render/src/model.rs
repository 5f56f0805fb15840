#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableOutcome {
    Pass,
    Warn,
    Fail,
    Skipped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Warn,
    Fail,
}

impl RenderableStatus {
    pub fn label(self) -> &'static str {
        match self {
            RenderableStatus::Pass => "PASS",
            RenderableStatus::Warn => "WARN",
            RenderableStatus::Fail => "FAIL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResult {
    pub rule_id: String,
    pub category: String,
    pub severity: RenderableSeverity,
    pub outcome: RenderableOutcome,
    pub detail: Option<String>,
    pub promoted: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderableCounts {
    pub pass: u32,
    pub warn: u32,
    pub fail: u32,
    pub skipped: u32,
}

impl RenderableCounts {
    pub fn from_results(results: &[RenderableResult]) -> Self {
        let mut counts = Self::default();
        for r in results {
            match r.outcome {
                RenderableOutcome::Pass => counts.pass += 1,
                RenderableOutcome::Warn => counts.warn += 1,
                RenderableOutcome::Fail => counts.fail += 1,
                RenderableOutcome::Skipped => counts.skipped += 1,
            }
        }
        counts
    }

    pub(crate) fn summary(&self) -> String {
        format!(
            "{} pass, {} warn, {} fail, {} skipped",
            self.pass, self.warn, self.fail, self.skipped
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDocument {
    pub name: String,
    pub size_bytes: Option<u64>,
    pub mode: String,
    pub status: RenderableStatus,
    pub counts: RenderableCounts,
    pub results: Vec<RenderableResult>,
    pub digest: Option<String>,
}

impl RenderableDocument {
    /// Size in KB with one decimal, e.g. `2.0 KB`.
    pub(crate) fn size_label(&self) -> Option<String> {
        self.size_bytes
            .map(|bytes| format!("{:.1} KB", bytes as f64 / 1024.0))
    }
}

/// One or more validated documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    /// Worst status across `documents`.
    pub status: RenderableStatus,
    pub documents: Vec<RenderableDocument>,
}
