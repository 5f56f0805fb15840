use crate::resolve::EffectiveConfig;
use docguard_types::{Category, Mode};
use std::collections::BTreeSet;

/// Known profile names.
pub const PROFILES: &[&str] = &["standard", "strict"];

/// Documents picked up from a directory when the config names no `include` globs.
pub const DEFAULT_INCLUDE: &[&str] = &[
    "**/*.md",
    "**/*.markdown",
    "**/*.txt",
    "**/*.pdf",
    "**/*.docx",
    "**/*.xlsx",
    "**/*.facts.json",
];

pub const DEFAULT_EXCLUDE: &[&str] = &["**/target/**", "**/.git/**"];

/// Preset for a profile name, or `None` for an unknown profile.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    let mode = match profile {
        "standard" => Mode::Standard,
        "strict" => Mode::Strict,
        _ => return None,
    };
    Some(EffectiveConfig {
        profile: profile.to_string(),
        mode,
        categories: Category::ALL.to_vec(),
        disabled: BTreeSet::new(),
        include: DEFAULT_INCLUDE.iter().map(|g| g.to_string()).collect(),
        exclude: DEFAULT_EXCLUDE.iter().map(|g| g.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_profile_has_a_preset() {
        for name in PROFILES {
            let cfg = preset(name).expect("preset");
            assert_eq!(cfg.profile, *name);
            assert_eq!(cfg.categories, Category::ALL);
        }
        assert_eq!(preset("strict").map(|c| c.mode), Some(Mode::Strict));
        assert!(preset("lenient").is_none());
    }
}
