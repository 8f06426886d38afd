use artifactflow_types::{Artifact, Mapping, Rule};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything the engine reads, as one JSON document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Snapshot {
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Applied in order after all rules, each with the existence check.
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}
