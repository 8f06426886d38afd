use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for artifactflow reports.
pub const SCHEMA_REPORT_V1: &str = "artifactflow.report.v1";

/// Rule id -> human-readable problems for that rule.
pub type ViolationMap = BTreeMap<String, Vec<String>>;

/// Caller input for a single validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub artifact_id: String,
    pub environment: String,
}

/// The outcome of validating one artifact for one environment.
///
/// `violations` is present only when `passes` is false. `advisories` carries violations of
/// non-enforced rules when advisory rules are configured not to block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub artifact_id: String,
    pub environment: String,
    pub passes: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub violations: Option<ViolationMap>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub advisories: ViolationMap,
}

/// Structured form of one violation, kept alongside the plain response for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub rule_id: String,
    pub code: String,
    pub message: String,
    /// The `enforced` flag of the mapping that activated the rule.
    pub enforced: bool,
    /// Whether the finding gates `passes` under the configured advisory mode.
    pub blocking: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Report envelope written by the CLI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub profile: String,
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidationResponse>,
    #[serde(default)]
    pub findings: Vec<Finding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable code for `error` (see `artifactflow explain`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}
