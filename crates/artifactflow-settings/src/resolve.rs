use crate::{model::ArtifactflowConfigV1, presets};
use anyhow::Context;
use artifactflow_domain::policy::{AdvisoryMode, EffectiveConfig};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub advisory: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    pub default_environment: Option<String>,
}

pub fn resolve_config(
    cfg: ArtifactflowConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref() {
        anyhow::ensure!(
            schema == crate::SCHEMA_CONFIG_V1,
            "unsupported config schema: {schema} (expected {})",
            crate::SCHEMA_CONFIG_V1
        );
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile)
        .with_context(|| format!("unknown profile: {profile} (expected 'strict' or 'lenient')"))?;

    if let Some(advisory) = overrides.advisory.or(cfg.advisory) {
        effective.advisory = parse_advisory(&advisory)?;
    }

    Ok(ResolvedConfig {
        effective,
        default_environment: cfg.default_environment,
    })
}

fn parse_advisory(v: &str) -> anyhow::Result<AdvisoryMode> {
    AdvisoryMode::parse(v)
        .with_context(|| format!("unknown advisory mode: {v} (expected 'block' or 'report')"))
}
