use crate::model::DocumentFacts;

pub(crate) fn facts(filename: &str, metadata: &[(&str, &str)], sections: &[&str]) -> DocumentFacts {
    DocumentFacts::new(
        filename,
        metadata.iter().copied(),
        sections.iter().map(|s| s.to_string()).collect(),
    )
}

pub(crate) fn named(filename: &str) -> DocumentFacts {
    facts(filename, &[], &[])
}

/// A report that passes every built-in rule, strict mode included.
pub(crate) fn compliant_report() -> DocumentFacts {
    facts(
        "PRJ01-MAC-ZZ-00-RP-A-0001.md",
        &[
            ("title", "Ground Investigation Report"),
            ("author", "J. Smith"),
            ("status", "S2"),
            ("revision", "P01"),
        ],
        &[
            "Ground Investigation Report",
            "1. Introduction",
            "2. Scope",
            "3. Findings",
            "4. Conclusion",
        ],
    )
}
