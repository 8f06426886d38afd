use crate::Value;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The comparison a limit performs.
///
/// Unknown kinds are preserved verbatim so the engine can report them as violations
/// instead of rejecting the whole rule at decode time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LimitKind {
    Min,
    Max,
    Equal,
    Set,
    Unsupported(String),
}

impl LimitKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "min" | "minimum" => LimitKind::Min,
            "max" | "maximum" => LimitKind::Max,
            "equal" | "equality" | "eq" => LimitKind::Equal,
            "set" | "membership" | "in" => LimitKind::Set,
            other => LimitKind::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            LimitKind::Min => "min",
            LimitKind::Max => "max",
            LimitKind::Equal => "equal",
            LimitKind::Set => "set",
            LimitKind::Unsupported(s) => s,
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for LimitKind {
    fn from(value: String) -> Self {
        LimitKind::parse(&value)
    }
}

impl From<LimitKind> for String {
    fn from(value: LimitKind) -> Self {
        match value {
            LimitKind::Unsupported(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

/// A single typed constraint: `{ "type": "max", "value": 5 }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Limit {
    #[serde(rename = "type")]
    #[schemars(with = "String")]
    pub kind: LimitKind,

    #[serde(default)]
    #[schemars(with = "serde_json::Value")]
    pub value: Value,
}

impl Limit {
    pub fn new(kind: LimitKind, value: impl Into<Value>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// A named bundle of a key path and one or more limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, rename = "ruleFamily", alias = "family", skip_serializing_if = "String::is_empty")]
    pub family: String,

    /// Dot-separated key path, e.g. `metadata.cve.high`.
    #[serde(rename = "ruleKey", alias = "path")]
    pub path: String,

    /// Accepts a single limit object, an array of limits, or the shorthand table
    /// `{ "min": 5, "max": 10 }`.
    #[serde(rename = "ruleLimits", alias = "limits", deserialize_with = "one_or_many_limits")]
    #[schemars(with = "Vec<Limit>")]
    pub limits: Vec<Limit>,
}

fn one_or_many_limits<'de, D>(deserializer: D) -> Result<Vec<Limit>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LimitsInput {
        Many(Vec<Limit>),
        One(Limit),
        Table(BTreeMap<String, serde_json::Value>),
    }

    let limits = match LimitsInput::deserialize(deserializer)? {
        LimitsInput::Many(limits) => limits,
        LimitsInput::One(limit) => vec![limit],
        LimitsInput::Table(table) => table
            .into_iter()
            .map(|(kind, value)| Limit {
                kind: LimitKind::parse(&kind),
                value: Value::from(value),
            })
            .collect(),
    };
    if limits.is_empty() {
        return Err(serde::de::Error::custom(
            "ruleLimits must contain at least one limit",
        ));
    }
    Ok(limits)
}

/// Binds a rule to the environments where it is active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub rule_id: String,

    /// `{ "development": true, "production": false }`. Only a boolean `true` activates.
    #[serde(default, alias = "activeEnvironments")]
    #[schemars(with = "BTreeMap<String, serde_json::Value>")]
    pub environments: BTreeMap<String, Value>,

    #[serde(default)]
    pub enforced: bool,
}
