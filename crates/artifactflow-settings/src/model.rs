use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "artifactflow.config.v1";

/// `artifactflow.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ArtifactflowConfigV1 {
    /// Optional schema string for tooling (`artifactflow.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default) or `lenient`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// How non-enforced rules count: `block` or `report`. Overrides the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,

    /// Environment used when a caller does not name one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_environment: Option<String>,
}
