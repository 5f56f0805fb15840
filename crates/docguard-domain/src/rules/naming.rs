use super::codes::{self, DocumentNumber, FIELD_COUNT, FIELD_NAMES};
use crate::model::DocumentFacts;
use crate::rule::Verdict;
use regex::Regex;
use std::sync::LazyLock;

/// Allowed shape of each document number field, in field order.
const FIELD_PATTERNS: [(&str, &str); FIELD_COUNT] = [
    (r"^[A-Z0-9]{2,6}$", "2-6 uppercase letters or digits"),
    (r"^[A-Z0-9]{3,6}$", "3-6 uppercase letters or digits"),
    (r"^[A-Z0-9]{1,2}$", "1-2 uppercase letters or digits"),
    (r"^[A-Z0-9]{2}$", "2 uppercase letters or digits"),
    (r"^[A-Z0-9]{2}$", "2 uppercase letters or digits"),
    (r"^[A-Z]{1,2}$", "1-2 uppercase letters"),
    (r"^[0-9]{4,6}$", "4-6 digits"),
];

static FIELD_REGEXES: LazyLock<Vec<Option<Regex>>> = LazyLock::new(|| {
    FIELD_PATTERNS
        .iter()
        .map(|(pattern, _)| Regex::new(pattern).ok())
        .collect()
});

pub fn field_count(facts: &DocumentFacts) -> Verdict {
    let stem = facts.stem();
    let found = stem.split('-').count();
    if found == FIELD_COUNT {
        Verdict::Pass
    } else {
        Verdict::Fail(format!(
            "file name '{stem}' has {found} '-' separated field(s); expected {FIELD_COUNT} \
             (project-originator-volume-level-type-role-number)"
        ))
    }
}

pub fn field_format(facts: &DocumentFacts) -> Verdict {
    let Some(number) = DocumentNumber::parse(facts.stem()) else {
        return Verdict::Warn(format!(
            "cannot check field formats: '{}' is not a {FIELD_COUNT}-field document number",
            facts.stem()
        ));
    };

    let mut problems = Vec::new();
    for (idx, value) in number.fields.iter().enumerate() {
        let (_, expected) = FIELD_PATTERNS[idx];
        let Some(re) = FIELD_REGEXES[idx].as_ref() else {
            return Verdict::Warn(format!(
                "cannot check field '{}': pattern unavailable",
                FIELD_NAMES[idx]
            ));
        };
        if !re.is_match(value) {
            problems.push(format!(
                "{} '{}' (expected {})",
                FIELD_NAMES[idx], value, expected
            ));
        }
    }

    if problems.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail(format!("malformed field(s): {}", problems.join("; ")))
    }
}

pub fn role_code(facts: &DocumentFacts) -> Verdict {
    let Some(number) = DocumentNumber::parse(facts.stem()) else {
        return Verdict::Warn("cannot derive role code from file name".to_string());
    };
    let role = number.role();
    if codes::is_known_role(role) {
        Verdict::Pass
    } else {
        Verdict::Warn(format!("unknown role code '{role}'"))
    }
}

pub fn type_code(facts: &DocumentFacts) -> Verdict {
    let Some(number) = DocumentNumber::parse(facts.stem()) else {
        return Verdict::Warn("cannot derive type code from file name".to_string());
    };
    let type_code = number.type_code();
    if codes::is_known_type(type_code) {
        Verdict::Pass
    } else {
        Verdict::Warn(format!("unknown type code '{type_code}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::named;

    #[test]
    fn field_count_accepts_seven_fields() {
        assert_eq!(field_count(&named("PRJ01-MAC-ZZ-00-RP-A-0001.pdf")), Verdict::Pass);
    }

    #[test]
    fn field_count_rejects_free_text_names() {
        let verdict = field_count(&named("Site survey final.pdf"));
        let Verdict::Fail(detail) = &verdict else {
            panic!("expected Fail, got {verdict:?}");
        };
        assert!(detail.contains("has 1 '-' separated field(s)"), "{detail}");
    }

    #[test]
    fn field_count_uses_stem_only() {
        assert_eq!(field_count(&named("A1-MAC-ZZ-00-RP-A-0001")), Verdict::Pass);
        assert!(matches!(
            field_count(&named("A1-MAC-ZZ-00-RP-A-0001-EXTRA.pdf")),
            Verdict::Fail(_)
        ));
    }

    #[test]
    fn field_format_reports_every_bad_field() {
        let verdict = field_format(&named("prj01-MAC-ZZ-00-RP-a-12.pdf"));
        let Verdict::Fail(detail) = &verdict else {
            panic!("expected Fail, got {verdict:?}");
        };
        assert!(detail.contains("project 'prj01'"), "{detail}");
        assert!(detail.contains("role 'a'"), "{detail}");
        assert!(detail.contains("number '12' (expected 4-6 digits)"), "{detail}");
        assert!(!detail.contains("originator"), "{detail}");
    }

    #[test]
    fn field_format_warns_when_unclassifiable() {
        assert!(matches!(
            field_format(&named("report.pdf")),
            Verdict::Warn(_)
        ));
    }

    #[test]
    fn role_and_type_codes_are_checked_against_registries() {
        let good = named("PRJ01-MAC-ZZ-00-RP-A-0001.pdf");
        assert_eq!(role_code(&good), Verdict::Pass);
        assert_eq!(type_code(&good), Verdict::Pass);

        let bad = named("PRJ01-MAC-ZZ-00-XY-AA-0001.pdf");
        assert_eq!(role_code(&bad), Verdict::Warn("unknown role code 'AA'".to_string()));
        assert_eq!(type_code(&bad), Verdict::Warn("unknown type code 'XY'".to_string()));

        assert!(matches!(role_code(&named("x.pdf")), Verdict::Warn(_)));
        assert!(matches!(type_code(&named("x.pdf")), Verdict::Warn(_)));
    }
}
