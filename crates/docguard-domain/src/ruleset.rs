use crate::error::ConfigurationError;
use crate::registry::registry;
use crate::rule::Rule;
use docguard_types::{Category, Mode};

/// An ordered collection of rules plus the mode to evaluate them in.
///
/// Rule order is evaluation order, short-circuit precedence, and report order.
#[derive(Clone, Debug)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    pub mode: Mode,
}

impl RuleSet {
    /// Build a standard-mode rule set from the registry.
    ///
    /// `categories` restricts the set to the named categories (`None` means all). Ordering is
    /// naming, metadata, structure, with ids lexicographic inside each category, regardless of
    /// the order the filter names them in.
    pub fn build(categories: Option<&[&str]>) -> Result<Self, ConfigurationError> {
        let selected: Vec<Category> = match categories {
            None => Category::ALL.to_vec(),
            Some(names) => names
                .iter()
                .map(|name| {
                    Category::parse(name)
                        .ok_or_else(|| ConfigurationError::UnknownCategory(name.to_string()))
                })
                .collect::<Result<_, _>>()?,
        };

        let rules = registry()
            .all()
            .iter()
            .filter(|r| selected.contains(&r.category))
            .copied()
            .collect();

        Ok(Self {
            rules,
            mode: Mode::Standard,
        })
    }

    /// A rule set over caller-provided rules, kept in the given order.
    pub fn from_rules(rules: Vec<Rule>, mode: Mode) -> Self {
        Self { rules, mode }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Remove the given rule ids. Ids must be known to the registry or to this set.
    pub fn without(mut self, ids: &[&str]) -> Result<Self, ConfigurationError> {
        for id in ids {
            let known = registry().contains(id) || self.rules.iter().any(|r| r.id == *id);
            if !known {
                return Err(ConfigurationError::UnknownRule(id.to_string()));
            }
        }
        self.rules.retain(|r| !ids.contains(&r.id));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.id)
    }
}
