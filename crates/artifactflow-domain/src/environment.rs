//! Selecting the rules that apply to an environment.

use crate::error::EngineError;
use crate::store::RuleStore;
use artifactflow_types::{Mapping, Rule};
use std::collections::BTreeMap;

/// A rule selected for an environment, with the enforcement flag of its mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveRule {
    pub rule: Rule,
    pub enforced: bool,
    pub mapping_id: String,
}

/// Only a boolean `true` activates; strings like `"true"` and missing entries do not.
pub fn is_active_for(mapping: &Mapping, environment: &str) -> bool {
    mapping
        .environments
        .get(environment)
        .is_some_and(|v| v.is_true())
}

/// Rules active for `environment`, one entry per rule.
///
/// When several mappings activate the same rule the first one fixes its position and
/// the rule counts as enforced if any of them is. A mapping that names a missing rule
/// fails the whole lookup.
pub fn active_rules_for<S>(store: &S, environment: &str) -> Result<Vec<ActiveRule>, EngineError>
where
    S: RuleStore + ?Sized,
{
    let mappings = store.fetch_mappings(environment)?;

    let mut active: Vec<ActiveRule> = Vec::with_capacity(mappings.len());
    let mut seen: BTreeMap<String, usize> = BTreeMap::new();

    for mapping in mappings.into_iter().filter(|m| is_active_for(m, environment)) {
        if let Some(&idx) = seen.get(&mapping.rule_id) {
            active[idx].enforced |= mapping.enforced;
            continue;
        }

        let Some(rule) = store.fetch_rule(&mapping.rule_id)? else {
            tracing::warn!(
                target: "artifactflow::engine",
                mapping = %mapping.id,
                rule = %mapping.rule_id,
                "mapping references a missing rule"
            );
            return Err(EngineError::DanglingRule {
                mapping_id: mapping.id,
                rule_id: mapping.rule_id,
            });
        };

        seen.insert(mapping.rule_id.clone(), active.len());
        active.push(ActiveRule {
            rule,
            enforced: mapping.enforced,
            mapping_id: mapping.id,
        });
    }

    Ok(active)
}
