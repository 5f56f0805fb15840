//! Strict-mode severity promotion, kept as data rather than per-rule branches.

use docguard_types::ids;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Rule id -> whether strict mode upgrades a `warn` verdict to `fail`.
const STRICT_PROMOTIONS: &[(&str, bool)] = &[
    (ids::RULE_NAMING_FIELD_COUNT, false),
    (ids::RULE_NAMING_FIELD_FORMAT, false),
    (ids::RULE_NAMING_ROLE_CODE, true),
    (ids::RULE_NAMING_TYPE_CODE, true),
    (ids::RULE_METADATA_REQUIRED_FIELDS, false),
    (ids::RULE_METADATA_REVISION_FORMAT, true),
    (ids::RULE_METADATA_STATUS_CODE, true),
    (ids::RULE_METADATA_TITLE_PRESENT_IN_SECTIONS, false),
    (ids::RULE_STRUCTURE_DUPLICATE_SECTIONS, false),
    (ids::RULE_STRUCTURE_NOT_EMPTY, false),
    (ids::RULE_STRUCTURE_REQUIRED_SECTIONS, false),
    (ids::RULE_STRUCTURE_SECTION_ORDER, true),
];

static STANDARD: LazyLock<PromotionTable> =
    LazyLock::new(|| PromotionTable::from_entries(STRICT_PROMOTIONS.iter().copied()));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromotionTable {
    entries: BTreeMap<String, bool>,
}

impl PromotionTable {
    /// The built-in table used by [`crate::run`].
    pub fn standard() -> &'static PromotionTable {
        &STANDARD
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(id, p)| (id.into(), p)).collect(),
        }
    }

    /// Ids absent from the table are never promoted.
    pub fn promotes_in_strict(&self, rule_id: &str) -> bool {
        self.entries.get(rule_id).copied().unwrap_or(false)
    }

    pub fn promoted_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(|(_, promote)| **promote)
            .map(|(id, _)| id.as_str())
    }
}
