use super::codes::{self, normalize_section, DocumentNumber};
use crate::model::DocumentFacts;
use crate::rule::Verdict;
use std::collections::BTreeSet;

/// Type code from the file name, or a warn verdict explaining why it cannot be derived.
fn document_type(facts: &DocumentFacts) -> Result<&str, Verdict> {
    DocumentNumber::parse(facts.stem())
        .map(|n| n.type_code())
        .ok_or_else(|| {
            Verdict::Warn(format!(
                "cannot derive document type from file name '{}'",
                facts.filename()
            ))
        })
}

fn normalized_sections(facts: &DocumentFacts) -> Vec<String> {
    facts
        .sections()
        .iter()
        .map(|s| normalize_section(s))
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn duplicate_sections(facts: &DocumentFacts) -> Verdict {
    let mut seen = BTreeSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    for section in normalized_sections(facts) {
        if !seen.insert(section.clone()) && !duplicates.contains(&section) {
            duplicates.push(section);
        }
    }

    if duplicates.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Warn(format!("duplicate sections: {}", duplicates.join(", ")))
    }
}

pub fn not_empty(facts: &DocumentFacts) -> Verdict {
    if normalized_sections(facts).is_empty() {
        Verdict::Warn("no sections detected".to_string())
    } else {
        Verdict::Pass
    }
}

pub fn required_sections(facts: &DocumentFacts) -> Verdict {
    let doc_type = match document_type(facts) {
        Ok(t) => t,
        Err(verdict) => return verdict,
    };
    let required = codes::required_sections(doc_type);
    if required.is_empty() {
        return Verdict::Pass;
    }

    let present: BTreeSet<String> = normalized_sections(facts).into_iter().collect();
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|r| !present.contains(&r.to_lowercase()))
        .collect();

    if missing.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail(format!(
            "missing required sections for type {doc_type}: {}",
            missing.join(", ")
        ))
    }
}

pub fn section_order(facts: &DocumentFacts) -> Verdict {
    let doc_type = match document_type(facts) {
        Ok(t) => t,
        Err(verdict) => return verdict,
    };
    let required = codes::required_sections(doc_type);

    let sections = normalized_sections(facts);
    // (canonical name, first position in the document) for required sections that are present.
    let positions: Vec<(&str, usize)> = required
        .iter()
        .filter_map(|r| {
            let wanted = r.to_lowercase();
            sections.iter().position(|s| *s == wanted).map(|pos| (*r, pos))
        })
        .collect();

    if positions.windows(2).all(|w| w[0].1 < w[1].1) {
        Verdict::Pass
    } else {
        let expected: Vec<&str> = positions.iter().map(|(name, _)| *name).collect();
        Verdict::Warn(format!(
            "sections out of order for type {doc_type}; expected {}",
            expected.join(" -> ")
        ))
    }
}
