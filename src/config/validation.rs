use super::AppConfig;
use crate::speech::{CustomRules, Normalizer};
use anyhow::{bail, Context, Result};
use clap::Parser;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values before anything else runs on them.
    pub fn validate(&mut self) -> Result<()> {
        const MIN_TICK_MS: u64 = 16;
        const MAX_TICK_MS: u64 = 1_000;

        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_ms) {
            bail!(
                "--tick-ms must be between {MIN_TICK_MS} and {MAX_TICK_MS}, got {}",
                self.tick_ms
            );
        }

        if let Some(path) = &self.rules {
            if !path.is_file() {
                bail!("--rules {} is not a readable file", path.display());
            }
        }

        Ok(())
    }

    /// Build the normalizer, loading the user rule file when one was given.
    pub fn build_normalizer(&self) -> Result<Normalizer> {
        match &self.rules {
            Some(path) => {
                let custom = CustomRules::load(path)
                    .with_context(|| format!("loading --rules {}", path.display()))?;
                Ok(Normalizer::with_custom(custom))
            }
            None => Ok(Normalizer::builtin()),
        }
    }
}
