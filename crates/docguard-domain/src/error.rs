use thiserror::Error;

/// Invalid rule set construction or invocation. Never retried.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("rule set is empty; at least one rule must be selected")]
    EmptyRuleSet,

    #[error("unknown category: {0} (expected naming, metadata or structure)")]
    UnknownCategory(String),

    #[error("unknown rule id: {0}")]
    UnknownRule(String),
}

/// Document facts that cannot be trusted as engine input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FactsError {
    /// Two metadata keys are equal once trimmed and lowercased.
    #[error("duplicate metadata key '{0}'")]
    DuplicateMetadataKey(String),
}
