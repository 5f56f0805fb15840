//! Stable identifiers for rules.
//!
//! A rule id is `<category>.<snake_case_name>`. IDs are report keys and must never be reused.

// naming
pub const RULE_NAMING_FIELD_COUNT: &str = "naming.field_count";
pub const RULE_NAMING_FIELD_FORMAT: &str = "naming.field_format";
pub const RULE_NAMING_ROLE_CODE: &str = "naming.role_code";
pub const RULE_NAMING_TYPE_CODE: &str = "naming.type_code";

// metadata
pub const RULE_METADATA_REQUIRED_FIELDS: &str = "metadata.required_fields";
pub const RULE_METADATA_REVISION_FORMAT: &str = "metadata.revision_format";
pub const RULE_METADATA_STATUS_CODE: &str = "metadata.status_code";
pub const RULE_METADATA_TITLE_PRESENT_IN_SECTIONS: &str = "metadata.title_present_in_sections";

// structure
pub const RULE_STRUCTURE_DUPLICATE_SECTIONS: &str = "structure.duplicate_sections";
pub const RULE_STRUCTURE_NOT_EMPTY: &str = "structure.not_empty";
pub const RULE_STRUCTURE_REQUIRED_SECTIONS: &str = "structure.required_sections";
pub const RULE_STRUCTURE_SECTION_ORDER: &str = "structure.section_order";
