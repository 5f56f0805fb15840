use super::codes::{self, normalize_section};
use crate::model::DocumentFacts;
use crate::rule::Verdict;
use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED_FIELDS: [&str; 4] = ["title", "author", "status", "revision"];

static REVISION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[PC][0-9]{2}(?:\.[0-9]+)?$").ok());

pub fn required_fields(facts: &DocumentFacts) -> Verdict {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|key| facts.field(key).is_none())
        .collect();

    if missing.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail(format!("missing required metadata: {}", missing.join(", ")))
    }
}

pub fn revision_format(facts: &DocumentFacts) -> Verdict {
    let Some(revision) = facts.field("revision") else {
        return Verdict::Warn("revision is not declared; cannot check its format".to_string());
    };
    let Some(re) = REVISION.as_ref() else {
        return Verdict::Warn("cannot check revision: pattern unavailable".to_string());
    };
    if re.is_match(revision) {
        Verdict::Pass
    } else {
        Verdict::Warn(format!(
            "revision '{revision}' does not match P01/C01 style (P or C, two digits, optional .n)"
        ))
    }
}

pub fn status_code(facts: &DocumentFacts) -> Verdict {
    let Some(status) = facts.field("status") else {
        return Verdict::Warn("status is not declared; cannot check suitability code".to_string());
    };
    if codes::is_known_status(status) {
        Verdict::Pass
    } else {
        Verdict::Warn(format!("unknown suitability status '{status}'"))
    }
}

pub fn title_present_in_sections(facts: &DocumentFacts) -> Verdict {
    let Some(title) = facts.field("title") else {
        return Verdict::Pass;
    };
    if facts.sections().is_empty() {
        return Verdict::Pass;
    }

    let wanted = normalize_section(title);
    if facts
        .sections()
        .iter()
        .any(|s| normalize_section(s) == wanted)
    {
        Verdict::Pass
    } else {
        Verdict::Warn(format!(
            "declared title '{title}' does not match any section title"
        ))
    }
}
