//! User-supplied substitution rules, loaded from a YAML file and applied
//! before the built-in tables so a user phrase can shadow a built-in one.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One substitution: every occurrence of `pattern` becomes `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rule {
    pub pattern: String,
    pub replacement: String,
}

/// Ordered user rules. Bounded so a bad file cannot turn normalization into
/// unbounded work.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct CustomRules {
    rules: Vec<Rule>,
}

impl CustomRules {
    pub const MAX_RULES: usize = 64;
    pub const MAX_REPLACEMENT_BYTES: usize = 64;

    /// Read and validate a rule file. The file is a YAML sequence of
    /// `{pattern, replacement}` entries.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read rules file {}", path.display()))?;
        let rules: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse rules file {}", path.display()))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn from_rules(rules: Vec<Rule>) -> Result<Self> {
        let rules = Self { rules };
        rules.validate()?;
        Ok(rules)
    }

    fn validate(&self) -> Result<()> {
        if self.rules.len() > Self::MAX_RULES {
            bail!(
                "rules file defines {} rules, maximum is {}",
                self.rules.len(),
                Self::MAX_RULES
            );
        }
        for rule in &self.rules {
            if rule.pattern.is_empty() {
                bail!("rules file contains an empty pattern");
            }
            if rule.replacement.len() > Self::MAX_REPLACEMENT_BYTES {
                bail!(
                    "replacement for {:?} is {} bytes, maximum is {}",
                    rule.pattern,
                    rule.replacement.len(),
                    Self::MAX_REPLACEMENT_BYTES
                );
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
