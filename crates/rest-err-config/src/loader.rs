use std::path::Path;

use crate::ErrorConfig;

impl ErrorConfig {
    /// Load configuration from a TOML file
    ///
    /// Expands `{{ env.VAR }}` placeholders before parsing, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a placeholder cannot be
    /// expanded, the TOML is invalid, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::from_toml_str(&raw)?;

        tracing::debug!(config_path = %path.display(), "loaded error configuration");

        Ok(config)
    }

    /// Parse configuration from an in-memory TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder cannot be expanded, the TOML is
    /// invalid, or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration can be used
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback message is blank
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fallback_message.trim().is_empty() {
            anyhow::bail!("fallback_message must not be empty");
        }

        Ok(())
    }
}
