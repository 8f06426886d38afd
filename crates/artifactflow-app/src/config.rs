use anyhow::Context;
use artifactflow_settings::{ArtifactflowConfigV1, Overrides, ResolvedConfig};

/// Parse and resolve config text; empty text means defaults.
pub(crate) fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        ArtifactflowConfigV1::default()
    } else {
        artifactflow_settings::parse_config_toml(config_text).context("parse config")?
    };
    artifactflow_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Explicit environment first, then the configured default.
pub(crate) fn pick_environment(
    explicit: Option<String>,
    resolved: &ResolvedConfig,
) -> anyhow::Result<String> {
    explicit
        .or_else(|| resolved.default_environment.clone())
        .context("no environment given and no default_environment configured")
}
