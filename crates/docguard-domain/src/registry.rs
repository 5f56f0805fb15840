//! Process-wide, read-only rule registry.
//!
//! Built once on first use and never mutated afterwards, so it can be shared across threads
//! without locking.

use crate::rule::Rule;
use crate::rules;
use docguard_types::Category;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static REGISTRY: LazyLock<Registry> = LazyLock::new(|| Registry::new(rules::catalog()));

/// The built-in rule registry.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

#[derive(Debug)]
pub struct Registry {
    /// Sorted by category (naming, metadata, structure), then id.
    rules: Vec<Rule>,
    by_id: BTreeMap<&'static str, usize>,
}

impl Registry {
    fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by(|a, b| a.category.cmp(&b.category).then(a.id.cmp(b.id)));
        let by_id: BTreeMap<&'static str, usize> = rules
            .iter()
            .enumerate()
            .map(|(idx, rule)| (rule.id, idx))
            .collect();
        debug_assert_eq!(by_id.len(), rules.len(), "duplicate rule id in catalog");
        Self { rules, by_id }
    }

    /// All rules in evaluation order.
    pub fn all(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.by_id.get(id).map(|&idx| &self.rules[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(move |r| r.category == category)
    }
}
