use crate::Snapshot;
use anyhow::Context;
use artifactflow_domain::environment::is_active_for;
use artifactflow_domain::store::{RecordStore, RuleStore, StoreError};
use artifactflow_types::{Artifact, Mapping, Rule};
use std::collections::{BTreeMap, BTreeSet};

/// Read-mostly store. Mappings keep insertion order, which is the order rules are
/// evaluated in.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    artifacts: BTreeMap<String, Artifact>,
    rules: BTreeMap<String, Rule>,
    mappings: Vec<Mapping>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> anyhow::Result<Self> {
        let mut store = Self::new();
        for artifact in snapshot.artifacts {
            let id = artifact.id.clone();
            store
                .insert_artifact(artifact)
                .with_context(|| format!("artifact {id}"))?;
        }
        for rule in snapshot.rules {
            let id = rule.id.clone();
            store.insert_rule(rule).with_context(|| format!("rule {id}"))?;
        }
        // Explicit ids anywhere in the snapshot are reserved before numbering the rest.
        let mut taken: BTreeSet<String> = snapshot
            .mappings
            .iter()
            .filter(|m| !m.id.is_empty())
            .map(|m| m.id.clone())
            .collect();
        for (idx, mut mapping) in snapshot.mappings.into_iter().enumerate() {
            if mapping.id.is_empty() {
                mapping.id = fresh_mapping_id(idx + 1, |id| taken.contains(id));
                taken.insert(mapping.id.clone());
            }
            store
                .insert_mapping(mapping)
                .with_context(|| format!("mapping #{idx}"))?;
        }
        Ok(store)
    }

    pub fn insert_artifact(&mut self, artifact: Artifact) -> Result<(), StoreError> {
        if self.artifacts.contains_key(&artifact.id) {
            return Err(StoreError::Duplicate {
                kind: "artifact",
                id: artifact.id,
            });
        }
        self.artifacts.insert(artifact.id.clone(), artifact);
        Ok(())
    }

    pub fn insert_rule(&mut self, rule: Rule) -> Result<(), StoreError> {
        if self.rules.contains_key(&rule.id) {
            return Err(StoreError::Duplicate {
                kind: "rule",
                id: rule.id,
            });
        }
        self.rules.insert(rule.id.clone(), rule);
        Ok(())
    }

    /// Add a mapping. The referenced rule must already exist; mappings without an
    /// id are numbered in insertion order.
    pub fn insert_mapping(&mut self, mut mapping: Mapping) -> Result<(), StoreError> {
        if !self.rule_exists(&mapping.rule_id)? {
            tracing::warn!(
                target: "artifactflow::store",
                mapping = %mapping.id,
                rule = %mapping.rule_id,
                "rejected mapping for unknown rule"
            );
            return Err(StoreError::RuleNotFound(mapping.rule_id));
        }
        if mapping.id.is_empty() {
            mapping.id = fresh_mapping_id(self.mappings.len() + 1, |id| {
                self.mappings.iter().any(|m| m.id == id)
            });
        }
        if self.mappings.iter().any(|m| m.id == mapping.id) {
            return Err(StoreError::Duplicate {
                kind: "mapping",
                id: mapping.id,
            });
        }
        self.mappings.push(mapping);
        Ok(())
    }

    /// Delete a rule, leaving any mappings that point at it in place.
    pub fn remove_rule(&mut self, id: &str) -> Option<Rule> {
        self.rules.remove(id)
    }

    pub fn artifact_count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }
}

/// First `mapping-N` id at or after `start` that is not taken.
fn fresh_mapping_id(start: usize, taken: impl Fn(&str) -> bool) -> String {
    (start..)
        .map(|n| format!("mapping-{n}"))
        .find(|id| !taken(id))
        .unwrap_or_default()
}

impl RuleStore for MemoryStore {
    fn fetch_mappings(&self, environment: &str) -> Result<Vec<Mapping>, StoreError> {
        Ok(self
            .mappings
            .iter()
            .filter(|m| is_active_for(m, environment))
            .cloned()
            .collect())
    }

    fn fetch_rule(&self, id: &str) -> Result<Option<Rule>, StoreError> {
        Ok(self.rules.get(id).cloned())
    }

    fn rule_exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.rules.contains_key(id))
    }
}

impl RecordStore for MemoryStore {
    fn fetch_record(&self, id: &str) -> Result<Option<Artifact>, StoreError> {
        Ok(self.artifacts.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artifactflow_types::{Limit, LimitKind, Value};

    fn rule(id: &str) -> Rule {
        Rule {
            id: id.to_string(),
            name: String::new(),
            description: String::new(),
            family: String::new(),
            path: "metadata.cve.high".to_string(),
            limits: vec![Limit::new(LimitKind::Max, 5i64)],
        }
    }

    fn mapping(id: &str, rule_id: &str, env: &str) -> Mapping {
        Mapping {
            id: id.to_string(),
            rule_id: rule_id.to_string(),
            environments: [(env.to_string(), Value::Bool(true))].into_iter().collect(),
            enforced: true,
        }
    }

    #[test]
    fn mapping_for_unknown_rule_is_rejected() {
        let mut store = MemoryStore::new();
        let err = store
            .insert_mapping(mapping("m1", "missing", "dev"))
            .expect_err("unknown rule");
        assert_eq!(err, StoreError::RuleNotFound("missing".to_string()));
        assert_eq!(store.mapping_count(), 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut store = MemoryStore::new();
        store.insert_rule(rule("r1")).expect("first rule");
        assert!(matches!(
            store.insert_rule(rule("r1")),
            Err(StoreError::Duplicate { kind: "rule", .. })
        ));

        store.insert_mapping(mapping("m1", "r1", "dev")).expect("first mapping");
        assert!(matches!(
            store.insert_mapping(mapping("m1", "r1", "prod")),
            Err(StoreError::Duplicate { kind: "mapping", .. })
        ));
    }

    #[test]
    fn unnamed_mappings_get_sequential_ids() {
        let mut store = MemoryStore::new();
        store.insert_rule(rule("r1")).expect("rule");
        store.insert_mapping(mapping("", "r1", "dev")).expect("mapping");
        store.insert_mapping(mapping("", "r1", "prod")).expect("mapping");

        let dev = store.fetch_mappings("dev").expect("dev");
        let prod = store.fetch_mappings("prod").expect("prod");
        assert_eq!(dev[0].id, "mapping-1");
        assert_eq!(prod[0].id, "mapping-2");
    }

    #[test]
    fn generated_ids_skip_explicit_ones() {
        let mut store = MemoryStore::new();
        store.insert_rule(rule("r1")).expect("rule");
        store.insert_mapping(mapping("mapping-2", "r1", "dev")).expect("explicit");
        store.insert_mapping(mapping("", "r1", "prod")).expect("generated");

        let prod = store.fetch_mappings("prod").expect("prod");
        assert_eq!(prod[0].id, "mapping-3");
    }

    #[test]
    fn snapshot_reserves_explicit_mapping_ids() {
        let snapshot: Snapshot = serde_json::from_value(serde_json::json!({
            "rules": [{ "id": "r1", "ruleKey": "a", "ruleLimits": { "type": "max", "value": 1 } }],
            "mappings": [
                { "ruleId": "r1", "environments": { "dev": true } },
                { "ruleId": "r1", "environments": { "qa": true } },
                { "id": "mapping-2", "ruleId": "r1", "environments": { "prod": true } }
            ]
        }))
        .expect("decode snapshot");

        let store = MemoryStore::from_snapshot(snapshot).expect("load");
        assert_eq!(store.mapping_count(), 3);
        assert_eq!(store.fetch_mappings("dev").expect("dev")[0].id, "mapping-1");
        assert_eq!(store.fetch_mappings("qa").expect("qa")[0].id, "mapping-3");
        assert_eq!(store.fetch_mappings("prod").expect("prod")[0].id, "mapping-2");
    }

    #[test]
    fn fetch_mappings_filters_by_environment_in_order() {
        let mut store = MemoryStore::new();
        store.insert_rule(rule("r1")).expect("rule");
        store.insert_rule(rule("r2")).expect("rule");
        store.insert_mapping(mapping("m2", "r2", "dev")).expect("mapping");
        store.insert_mapping(mapping("m1", "r1", "dev")).expect("mapping");
        store.insert_mapping(mapping("m3", "r1", "prod")).expect("mapping");

        let ids: Vec<String> = store
            .fetch_mappings("dev")
            .expect("dev")
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec!["m2", "m1"]);
    }

    #[test]
    fn removing_a_rule_keeps_its_mappings() {
        let mut store = MemoryStore::new();
        store.insert_rule(rule("r1")).expect("rule");
        store.insert_mapping(mapping("m1", "r1", "dev")).expect("mapping");

        assert!(store.remove_rule("r1").is_some());
        assert!(!store.rule_exists("r1").expect("exists"));
        assert_eq!(store.fetch_mappings("dev").expect("dev").len(), 1);
    }
}
