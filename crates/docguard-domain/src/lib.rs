//! Pure rule evaluation (no IO).
//!
//! Input: document facts extracted elsewhere, and a rule set.
//! Output: a deterministic validation report.

#![forbid(unsafe_code)]

pub mod digest;
pub mod error;
pub mod model;
pub mod policy;
pub mod registry;
pub mod rule;
pub mod ruleset;

mod engine;
mod rules;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{run, run_with_policy};
pub use error::{ConfigurationError, FactsError};
pub use model::{duplicate_metadata_key, DocumentFacts, FactsRecord};
pub use policy::PromotionTable;
pub use registry::{registry, Registry};
pub use rule::{Predicate, Rule, Verdict};
pub use ruleset::RuleSet;
