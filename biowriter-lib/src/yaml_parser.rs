use crate::config::BioConfig;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Parse a YAML profile file and return the full configuration including defaults
pub async fn parse_yaml_file<P: AsRef<Path>>(path: P) -> Result<BioConfig> {
    let content = fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read YAML file: {}", path.as_ref().display()))?;

    parse_yaml_string(&content)
        .with_context(|| format!("Invalid profile file: {}", path.as_ref().display()))
}

/// Parse a YAML string and return the full configuration including defaults
///
/// An empty document yields an empty profile with no defaults.
pub fn parse_yaml_string(content: &str) -> Result<BioConfig> {
    if content.trim().is_empty() {
        return Ok(BioConfig::default());
    }

    let config: BioConfig =
        serde_yaml::from_str(content).with_context(|| "Failed to parse YAML content")?;

    tracing::debug!(
        channel_name = %config.profile.channel_name,
        platform = ?config.defaults.platform,
        "Parsed profile"
    );

    Ok(config)
}
