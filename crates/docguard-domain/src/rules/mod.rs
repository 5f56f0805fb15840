use crate::rule::Rule;
use docguard_types::{ids, Category, Severity};

pub(crate) mod codes;
mod metadata;
mod naming;
mod structure;

/// Every built-in rule. Order here is irrelevant; the registry sorts by category, then id.
pub(crate) fn catalog() -> Vec<Rule> {
    use Category::{Metadata, Naming, Structure};
    use Severity::{Error, Info, Warning};

    vec![
        Rule::new(ids::RULE_NAMING_FIELD_COUNT, Naming, Error, naming::field_count).gating(),
        Rule::new(ids::RULE_NAMING_FIELD_FORMAT, Naming, Error, naming::field_format).gating(),
        Rule::new(ids::RULE_NAMING_ROLE_CODE, Naming, Warning, naming::role_code),
        Rule::new(ids::RULE_NAMING_TYPE_CODE, Naming, Warning, naming::type_code),
        Rule::new(
            ids::RULE_METADATA_REQUIRED_FIELDS,
            Metadata,
            Error,
            metadata::required_fields,
        ),
        Rule::new(
            ids::RULE_METADATA_REVISION_FORMAT,
            Metadata,
            Warning,
            metadata::revision_format,
        ),
        Rule::new(
            ids::RULE_METADATA_STATUS_CODE,
            Metadata,
            Warning,
            metadata::status_code,
        ),
        Rule::new(
            ids::RULE_METADATA_TITLE_PRESENT_IN_SECTIONS,
            Metadata,
            Info,
            metadata::title_present_in_sections,
        ),
        Rule::new(
            ids::RULE_STRUCTURE_DUPLICATE_SECTIONS,
            Structure,
            Info,
            structure::duplicate_sections,
        ),
        Rule::new(
            ids::RULE_STRUCTURE_NOT_EMPTY,
            Structure,
            Warning,
            structure::not_empty,
        ),
        Rule::new(
            ids::RULE_STRUCTURE_REQUIRED_SECTIONS,
            Structure,
            Error,
            structure::required_sections,
        ),
        Rule::new(
            ids::RULE_STRUCTURE_SECTION_ORDER,
            Structure,
            Warning,
            structure::section_order,
        ),
    ]
}
