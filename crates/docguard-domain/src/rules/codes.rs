//! Code registries and document number parsing shared by the rule predicates.

use regex::Regex;
use std::sync::LazyLock;

/// Number of `-` separated fields in a document number.
pub const FIELD_COUNT: usize = 7;

/// Field names in document number order.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "project",
    "originator",
    "volume",
    "level",
    "type",
    "role",
    "number",
];

/// Discipline role codes.
pub const ROLE_CODES: &[(&str, &str)] = &[
    ("A", "architect"),
    ("B", "building surveyor"),
    ("C", "civil engineer"),
    ("D", "drainage, highways engineer"),
    ("E", "electrical engineer"),
    ("F", "facilities manager"),
    ("G", "geographical and land surveyor"),
    ("H", "heating and ventilation designer"),
    ("I", "interior designer"),
    ("K", "client"),
    ("L", "landscape architect"),
    ("M", "mechanical engineer"),
    ("P", "public health engineer"),
    ("Q", "quantity surveyor"),
    ("S", "structural engineer"),
    ("T", "town and country planner"),
    ("W", "contractor"),
    ("X", "subcontractor"),
    ("Y", "specialist designer"),
    ("Z", "general"),
];

/// Information type codes.
pub const TYPE_CODES: &[(&str, &str)] = &[
    ("AF", "animation file"),
    ("BQ", "bill of quantities"),
    ("CA", "calculation"),
    ("CM", "combined model"),
    ("CO", "correspondence"),
    ("CP", "cost plan"),
    ("CR", "clash rendition"),
    ("DB", "database"),
    ("DR", "drawing"),
    ("FN", "file note"),
    ("HS", "health and safety"),
    ("IE", "information exchange file"),
    ("M2", "2D model"),
    ("M3", "3D model"),
    ("MI", "minutes"),
    ("MR", "model rendition"),
    ("MS", "method statement"),
    ("PP", "presentation"),
    ("PR", "programme"),
    ("RD", "room data sheet"),
    ("RI", "request for information"),
    ("RP", "report"),
    ("SA", "schedule of accommodation"),
    ("SH", "schedule"),
    ("SN", "snagging list"),
    ("SP", "specification"),
    ("SU", "survey"),
    ("VS", "visualisation"),
];

/// Suitability status codes.
pub const STATUS_CODES: &[&str] = &[
    "S0", "S1", "S2", "S3", "S4", "S5", "S6", "S7", "A1", "A2", "A3", "A4", "A5", "A6", "A7", "B1",
    "B2", "B3", "B4", "B5", "B6", "B7", "CR",
];

/// Required sections per type code, in canonical order.
const REQUIRED_SECTIONS: &[(&str, &[&str])] = &[
    ("CA", &["Introduction", "Assumptions", "Calculations", "Results"]),
    ("MI", &["Attendees", "Actions"]),
    ("RP", &["Introduction", "Scope", "Findings", "Conclusion"]),
    ("SP", &["Scope", "References", "Requirements"]),
];

pub fn is_known_role(code: &str) -> bool {
    ROLE_CODES.iter().any(|(c, _)| *c == code)
}

pub fn is_known_type(code: &str) -> bool {
    TYPE_CODES.iter().any(|(c, _)| *c == code)
}

pub fn is_known_status(code: &str) -> bool {
    STATUS_CODES.contains(&code)
}

/// Required sections for a type code; empty for types without requirements.
pub fn required_sections(type_code: &str) -> &'static [&'static str] {
    REQUIRED_SECTIONS
        .iter()
        .find(|(t, _)| *t == type_code)
        .map(|(_, sections)| *sections)
        .unwrap_or(&[])
}

/// A file name stem split into its seven document number fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DocumentNumber<'a> {
    pub fields: [&'a str; FIELD_COUNT],
}

impl<'a> DocumentNumber<'a> {
    /// `None` unless `stem` has exactly seven `-` separated fields.
    pub fn parse(stem: &'a str) -> Option<Self> {
        let parts: Vec<&str> = stem.split('-').collect();
        let fields: [&str; FIELD_COUNT] = parts.try_into().ok()?;
        Some(Self { fields })
    }

    pub fn type_code(&self) -> &'a str {
        self.fields[4]
    }

    pub fn role(&self) -> &'a str {
        self.fields[5]
    }
}

/// `1.`, `4)`, `2.3`, `2.3.` but not a bare number such as the year in `2023 Results`.
static LEADING_NUMBERING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:\d+(?:\.\d+)*[.)]|\d+(?:\.\d+)+)\s+").ok());

/// Section title normalized for comparison: trimmed, leading numbering removed, lowercased.
pub fn normalize_section(title: &str) -> String {
    let title = title.trim();
    let stripped = match LEADING_NUMBERING.as_ref() {
        Some(re) => re.replace(title, ""),
        None => title.into(),
    };
    stripped.trim().to_lowercase()
}
