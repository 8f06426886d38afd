use crate::Value;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An artifact record: a few fixed descriptive attributes plus free-form metadata.
///
/// Input aliases (`type`, `family`, `metadata`) are accepted so that hand-written
/// fixtures can use the short names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, alias = "type", skip_serializing_if = "String::is_empty")]
    pub artifact_type: String,
    #[serde(default, alias = "family", skip_serializing_if = "String::is_empty")]
    pub artifact_family: String,

    /// Arbitrarily nested metadata (`{ "cve": { "high": 3 } }`).
    #[serde(default, alias = "metadata", skip_serializing_if = "BTreeMap::is_empty")]
    #[schemars(with = "BTreeMap<String, serde_json::Value>")]
    pub artifact_metadata: BTreeMap<String, Value>,
}
