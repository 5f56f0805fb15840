use crate::{model::DocguardConfigV1, presets};
use anyhow::Context;
use docguard_domain::{registry, ConfigurationError, RuleSet};
use docguard_types::{Category, Mode};
use globset::Glob;
use std::collections::BTreeSet;

/// Command-line overrides, applied on top of the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    /// `--strict`; loses to an explicit `--profile`.
    pub strict: bool,
    /// `--category`, replacing the config's `categories` when present.
    pub categories: Option<Vec<String>>,
}

/// Fully resolved settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub mode: Mode,
    /// Selected categories, in evaluation order.
    pub categories: Vec<Category>,
    /// Rule ids removed with `enabled = false`.
    pub disabled: BTreeSet<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl EffectiveConfig {
    /// The rule set this config selects.
    ///
    /// May be empty (for example `categories = []`); the engine rejects that with
    /// [`ConfigurationError::EmptyRuleSet`].
    pub fn rule_set(&self) -> Result<RuleSet, ConfigurationError> {
        let names: Vec<&str> = self.categories.iter().map(|c| c.as_str()).collect();
        let disabled: Vec<&str> = self.disabled.iter().map(String::as_str).collect();
        RuleSet::build(Some(&names))?
            .with_mode(self.mode)
            .without(&disabled)
    }
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: DocguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != crate::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            crate::SCHEMA_CONFIG_V1
        );
    }

    let profile = overrides
        .profile
        .clone()
        .or_else(|| overrides.strict.then(|| "strict".to_string()))
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    // Categories: CLI beats config.
    if let Some(names) = overrides.categories.as_ref().or(cfg.categories.as_ref()) {
        effective.categories = parse_categories(names)?;
    }

    // Per-check overrides.
    for (rule_id, cc) in &cfg.checks {
        if !registry().contains(rule_id) {
            return Err(ConfigurationError::UnknownRule(rule_id.clone()))
                .context("invalid [checks] entry in config");
        }
        match cc.enabled {
            Some(false) => {
                effective.disabled.insert(rule_id.clone());
            }
            Some(true) => {
                effective.disabled.remove(rule_id);
            }
            None => {}
        }
    }

    if !cfg.include.is_empty() {
        validate_globs("include", &cfg.include)?;
        effective.include = cfg.include;
    }
    if !cfg.exclude.is_empty() {
        validate_globs("exclude", &cfg.exclude)?;
        effective.exclude = cfg.exclude;
    }

    tracing::debug!(
        profile = %effective.profile,
        categories = ?effective.categories,
        disabled = ?effective.disabled,
        "resolved config"
    );
    Ok(ResolvedConfig { effective })
}

fn parse_categories(names: &[String]) -> anyhow::Result<Vec<Category>> {
    let mut selected = BTreeSet::new();
    for name in names {
        let category = Category::parse(name)
            .ok_or_else(|| ConfigurationError::UnknownCategory(name.clone()))?;
        selected.insert(category);
    }
    Ok(selected.into_iter().collect())
}

fn validate_globs(key: &str, patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid {key} glob: {pattern}"))?;
    }
    Ok(())
}
