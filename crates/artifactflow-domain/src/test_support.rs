use crate::store::{RecordStore, RuleStore, StoreError};
use artifactflow_types::{Artifact, Limit, LimitKind, Mapping, Rule, Value};
use std::collections::BTreeMap;

pub fn artifact_with_metadata(metadata: serde_json::Value) -> Artifact {
    let artifact_metadata = match Value::from(metadata) {
        Value::Map(map) => map,
        other => panic!("metadata must be an object, got {other:?}"),
    };
    Artifact {
        artifact_metadata,
        ..Artifact::default()
    }
}

pub fn rule(id: &str, path: &str, kind: LimitKind, value: impl Into<Value>) -> Rule {
    rule_with_limits(id, path, vec![Limit::new(kind, value)])
}

pub fn rule_with_limits(id: &str, path: &str, limits: Vec<Limit>) -> Rule {
    Rule {
        id: id.to_string(),
        name: String::new(),
        description: String::new(),
        family: String::new(),
        path: path.to_string(),
        limits,
    }
}

pub fn mapping(id: &str, rule_id: &str, environments: &[&str], enforced: bool) -> Mapping {
    Mapping {
        id: id.to_string(),
        rule_id: rule_id.to_string(),
        environments: environments
            .iter()
            .map(|env| (env.to_string(), Value::Bool(true)))
            .collect(),
        enforced,
    }
}

/// Minimal store for engine tests. Mappings keep insertion order and are not
/// existence-checked, so dangling references can be staged.
#[derive(Clone, Debug, Default)]
pub struct TestStore {
    artifacts: BTreeMap<String, Artifact>,
    rules: BTreeMap<String, Rule>,
    mappings: Vec<Mapping>,
}

impl TestStore {
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.insert(artifact.id.clone(), artifact);
        self
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.insert(rule.id.clone(), rule);
        self
    }

    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mappings.push(mapping);
        self
    }
}

impl RuleStore for TestStore {
    fn fetch_mappings(&self, environment: &str) -> Result<Vec<Mapping>, StoreError> {
        Ok(self
            .mappings
            .iter()
            .filter(|m| m.environments.get(environment).is_some_and(Value::is_true))
            .cloned()
            .collect())
    }

    fn fetch_rule(&self, id: &str) -> Result<Option<Rule>, StoreError> {
        Ok(self.rules.get(id).cloned())
    }
}

impl RecordStore for TestStore {
    fn fetch_record(&self, id: &str) -> Result<Option<Artifact>, StoreError> {
        Ok(self.artifacts.get(id).cloned())
    }
}
