//! Explain registry for rules.
//!
//! Maps rule IDs to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that would not pass the rule.
    pub before: &'static str,
    /// Input that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_NAMING_FIELD_COUNT => Some(explain_field_count()),
        ids::RULE_NAMING_FIELD_FORMAT => Some(explain_field_format()),
        ids::RULE_NAMING_ROLE_CODE => Some(explain_role_code()),
        ids::RULE_NAMING_TYPE_CODE => Some(explain_type_code()),
        ids::RULE_METADATA_REQUIRED_FIELDS => Some(explain_required_fields()),
        ids::RULE_METADATA_REVISION_FORMAT => Some(explain_revision_format()),
        ids::RULE_METADATA_STATUS_CODE => Some(explain_status_code()),
        ids::RULE_METADATA_TITLE_PRESENT_IN_SECTIONS => Some(explain_title_in_sections()),
        ids::RULE_STRUCTURE_DUPLICATE_SECTIONS => Some(explain_duplicate_sections()),
        ids::RULE_STRUCTURE_NOT_EMPTY => Some(explain_not_empty()),
        ids::RULE_STRUCTURE_REQUIRED_SECTIONS => Some(explain_required_sections()),
        ids::RULE_STRUCTURE_SECTION_ORDER => Some(explain_section_order()),
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_NAMING_FIELD_COUNT,
        ids::RULE_NAMING_FIELD_FORMAT,
        ids::RULE_NAMING_ROLE_CODE,
        ids::RULE_NAMING_TYPE_CODE,
        ids::RULE_METADATA_REQUIRED_FIELDS,
        ids::RULE_METADATA_REVISION_FORMAT,
        ids::RULE_METADATA_STATUS_CODE,
        ids::RULE_METADATA_TITLE_PRESENT_IN_SECTIONS,
        ids::RULE_STRUCTURE_DUPLICATE_SECTIONS,
        ids::RULE_STRUCTURE_NOT_EMPTY,
        ids::RULE_STRUCTURE_REQUIRED_SECTIONS,
        ids::RULE_STRUCTURE_SECTION_ORDER,
    ]
}

// --- naming ---

fn explain_field_count() -> Explanation {
    Explanation {
        title: "Document Number Field Count",
        description: "\
Checks that the file name is a complete document number with seven fields separated by `-`:

    Project-Originator-Volume-Level-Type-Role-Number

A file name with fewer or more fields cannot be mapped onto the information container
identifier fields, so the remaining naming and structure rules cannot trust it.
In strict mode a failure here skips every later rule.",
        remediation: "\
Rename the file so its name (without extension) has exactly seven `-` separated fields.
Use `ZZ` for a volume that spans the whole project and `XX` for no specific level.",
        examples: ExamplePair {
            before: "Site survey report final v2.pdf",
            after: "PRJ01-MAC-ZZ-00-RP-A-0001.pdf",
        },
    }
}

fn explain_field_format() -> Explanation {
    Explanation {
        title: "Document Number Field Format",
        description: "\
Checks each document number field against its allowed shape:
- Project: 2-6 uppercase letters or digits
- Originator: 3-6 uppercase letters or digits
- Volume/System: 1-2 uppercase letters or digits
- Level/Location: 2 uppercase letters or digits
- Type: 2 uppercase letters or digits
- Role: 1-2 uppercase letters
- Number: 4-6 digits

Lowercase codes and short numbers are common copy mistakes that break sorting and lookup
in a common data environment.",
        remediation: "\
Uppercase every code and zero-pad the number to at least four digits.",
        examples: ExamplePair {
            before: "prj01-mac-zz-00-rp-a-1.pdf",
            after: "PRJ01-MAC-ZZ-00-RP-A-0001.pdf",
        },
    }
}

fn explain_role_code() -> Explanation {
    Explanation {
        title: "Known Role Code",
        description: "\
Checks that the role field is a registered discipline code, for example `A` (architect),
`C` (civil engineer), `E` (electrical engineer), `M` (mechanical engineer),
`S` (structural engineer) or `Q` (quantity surveyor).

Unknown roles are reported as warnings, or as failures in strict mode.",
        remediation: "\
Replace the role field with the code of the discipline that produced the document.",
        examples: ExamplePair {
            before: "PRJ01-MAC-ZZ-00-RP-Z-0001.pdf",
            after: "PRJ01-MAC-ZZ-00-RP-A-0001.pdf",
        },
    }
}

fn explain_type_code() -> Explanation {
    Explanation {
        title: "Known Type Code",
        description: "\
Checks that the type field is a registered information type code, for example `DR` (drawing),
`M3` (3D model), `RP` (report), `SP` (specification), `CA` (calculation) or `MI` (minutes).

The type code also selects the required sections checked by the structure rules.",
        remediation: "\
Replace the type field with the code matching the document's content.",
        examples: ExamplePair {
            before: "PRJ01-MAC-ZZ-00-XY-A-0001.pdf",
            after: "PRJ01-MAC-ZZ-00-RP-A-0001.pdf",
        },
    }
}

// --- metadata ---

fn explain_required_fields() -> Explanation {
    Explanation {
        title: "Required Metadata Fields",
        description: "\
Checks that the document declares `title`, `author`, `status` and `revision`.
Blank values count as missing.

Without these fields a container cannot be tracked through its suitability and revision
history.",
        remediation: "\
Fill in the missing document properties, or add them to the front matter of text documents.",
        examples: ExamplePair {
            before: "---\ntitle: Ground investigation\n---",
            after: "---\ntitle: Ground investigation\nauthor: J. Smith\nstatus: S2\nrevision: P01\n---",
        },
    }
}

fn explain_revision_format() -> Explanation {
    Explanation {
        title: "Revision Format",
        description: "\
Checks that the revision is `P` (preliminary) or `C` (contractual) followed by two digits,
optionally with a `.n` version suffix: `P01`, `P02.1`, `C01`.

A missing revision cannot be classified and is reported as a warning.",
        remediation: "\
Use `P01` for the first shared revision and `C01` once the document is contractual.",
        examples: ExamplePair {
            before: "revision: rev B",
            after: "revision: P02",
        },
    }
}

fn explain_status_code() -> Explanation {
    Explanation {
        title: "Suitability Status Code",
        description: "\
Checks that the status is a recognised suitability code: `S0`-`S7` (work in progress and
shared), `A1`-`A7` (authorised), `B1`-`B7` (partial sign-off) or `CR` (as constructed record).",
        remediation: "\
Set the status to the suitability the document was issued for.",
        examples: ExamplePair {
            before: "status: for comment",
            after: "status: S3",
        },
    }
}

fn explain_title_in_sections() -> Explanation {
    Explanation {
        title: "Title Appears In Document",
        description: "\
Checks that the declared title matches one of the detected section titles.
A mismatch often means the properties were copied from another document.

Documents without a title or without sections pass.",
        remediation: "\
Update the title property, or the heading on the cover page, so they agree.",
        examples: ExamplePair {
            before: "title: Drainage strategy\n# Flood risk assessment",
            after: "title: Flood risk assessment\n# Flood risk assessment",
        },
    }
}

// --- structure ---

fn explain_duplicate_sections() -> Explanation {
    Explanation {
        title: "Duplicate Sections",
        description: "\
Reports section titles that occur more than once (ignoring case and leading numbering).",
        remediation: "\
Merge or rename the repeated sections.",
        examples: ExamplePair {
            before: "# Scope\n# Findings\n# Scope",
            after: "# Scope\n# Findings\n# Further scope",
        },
    }
}

fn explain_not_empty() -> Explanation {
    Explanation {
        title: "Sections Detected",
        description: "\
Warns when no section headings were detected at all. This usually means the document
has no heading styles, or the extractor could not read its outline.",
        remediation: "\
Apply heading styles to section titles so they can be detected.",
        examples: ExamplePair {
            before: "(no headings)",
            after: "# Introduction\n# Scope",
        },
    }
}

fn explain_required_sections() -> Explanation {
    Explanation {
        title: "Required Sections",
        description: "\
Checks that the sections required for the document type are present. The type comes from
the type field of the file name:
- `RP` report: Introduction, Scope, Findings, Conclusion
- `SP` specification: Scope, References, Requirements
- `CA` calculation: Introduction, Assumptions, Calculations, Results
- `MI` minutes: Attendees, Actions

Other types have no required sections. When the type cannot be derived from the file name
the rule warns instead of guessing.",
        remediation: "\
Add the missing sections, or correct the type field if the document was misclassified.",
        examples: ExamplePair {
            before: "PRJ01-MAC-ZZ-00-RP-A-0001.md\n# Introduction\n# Findings",
            after: "PRJ01-MAC-ZZ-00-RP-A-0001.md\n# Introduction\n# Scope\n# Findings\n# Conclusion",
        },
    }
}

fn explain_section_order() -> Explanation {
    Explanation {
        title: "Section Order",
        description: "\
Checks that the required sections that are present appear in their canonical order.
Missing sections are reported by `structure.required_sections`, not here.",
        remediation: "\
Reorder the sections to follow the canonical order for the document type.",
        examples: ExamplePair {
            before: "# Conclusion\n# Introduction",
            after: "# Introduction\n# Conclusion",
        },
    }
}
